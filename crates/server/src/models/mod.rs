use serde::Serialize;

pub mod identifier;
pub mod resource;
pub mod user;

#[derive(Clone, Debug, Serialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
