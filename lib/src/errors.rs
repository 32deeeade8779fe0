// UndefinedColor error

use std::fmt;

#[derive(Debug)]
pub struct UndefinedColorError {
    pub token: String,
}

impl fmt::Display for UndefinedColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "color '{}' isn't defined", self.token)
    }
}

impl std::error::Error for UndefinedColorError {}
