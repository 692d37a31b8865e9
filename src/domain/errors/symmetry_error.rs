//! Symmetry command error types.

use thiserror::Error;

/// Optional dependency the command relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// Image decoding/encoding (`image` feature).
    ImageCodec,
    /// Remote downloads (`http` feature).
    HttpClient,
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageCodec => write!(f, "image codec"),
            Self::HttpClient => write!(f, "http client"),
        }
    }
}

/// Failure category of a symmetry command invocation.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SymmetryError {
    #[error("missing optional dependency: {0}")]
    MissingDependency(Dependency),

    #[error("no command argument provided")]
    MissingArgument { command: String },

    #[error("invalid command argument: {argument}")]
    InvalidArgument { argument: String },

    #[error("no image found in message or quoted message")]
    ImageNotFound,

    #[error("failed to decode image: {message}")]
    Decode { message: String },

    #[error("symmetry processing failed: {message}")]
    Processing { message: String },

    #[error("failed to write temporary image: {message}")]
    TempWrite { message: String },

    #[error("host cannot send image attachments")]
    SendUnsupported,

    #[error("failed to send reply: {0}")]
    SendFailed(#[from] super::ReplyError),
}

impl SymmetryError {
    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates processing error.
    #[must_use]
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Creates temporary file error.
    #[must_use]
    pub fn temp_write(message: impl Into<String>) -> Self {
        Self::TempWrite {
            message: message.into(),
        }
    }

    /// Returns the fixed, user-facing reply for this failure.
    ///
    /// Never includes the underlying error detail.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingDependency(Dependency::ImageCodec) => {
                "图片处理依赖缺失：未启用图像编解码支持，无法处理图片。".to_string()
            }
            Self::MissingDependency(Dependency::HttpClient) => {
                "图片下载依赖缺失：未启用 HTTP 客户端，无法获取远程图片。".to_string()
            }
            Self::MissingArgument { command } => {
                format!("用法：回复一条含图片的消息，然后发送 /{command} <左右|上下|中心> 。")
            }
            Self::InvalidArgument { .. } => {
                "参数无效。可选：左右、上下、中心（或 lr / ud / center）。".to_string()
            }
            Self::ImageNotFound => {
                "找不到图片：请引用（回复）一条包含图片的消息，或在当前消息中附带图片。"
                    .to_string()
            }
            Self::Decode { .. } => "打开图片失败（格式可能不支持）。".to_string(),
            Self::Processing { .. } => "对称处理出错。".to_string(),
            Self::TempWrite { .. } => "保存临时图片失败。".to_string(),
            Self::SendUnsupported => "发送失败：当前平台不支持发送图片。".to_string(),
            Self::SendFailed(_) => "发送失败。".to_string(),
        }
    }

    /// Returns whether the failure was caused by user input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArgument { .. } | Self::ImageNotFound
        )
    }
}
