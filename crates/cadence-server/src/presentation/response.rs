use serde::Serialize;

/// Uniform JSON envelope for every API route.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_code: Some(error_code),
            message: Some(message.into()),
        }
    }
}
