//! お問い合わせフォームの検証
//!
//! デッキとは無関係の、状態を持たない入力チェック。

pub const NAME_ERROR: &str = "Please enter your name (min 2 chars).";
pub const EMAIL_ERROR: &str = "Please enter a valid email.";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters.";
pub const SUCCESS_MESSAGE: &str = "Thanks for your message!";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// フォーム入力値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }
}

/// 検証結果
///
/// 各フィールドのエラー文言。`None` はそのフィールドが通ったこと（表示をクリアする）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactOutcome {
    pub name_error: Option<&'static str>,
    pub email_error: Option<&'static str>,
    pub message_error: Option<&'static str>,
}

impl ContactOutcome {
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none() && self.email_error.is_none() && self.message_error.is_none()
    }

    /// 全項目が通った場合の成功メッセージ
    pub fn success_message(&self) -> Option<&'static str> {
        self.is_valid().then_some(SUCCESS_MESSAGE)
    }

    /// 表示するエラー文言（フォーム順）
    pub fn errors(&self) -> Vec<&'static str> {
        [self.name_error, self.email_error, self.message_error]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// 簡易メール判定（`@` と `.` を含むか）
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// フォームを検証する
pub fn validate_contact(form: &ContactForm) -> ContactOutcome {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    ContactOutcome {
        name_error: (name.chars().count() < MIN_NAME_CHARS).then_some(NAME_ERROR),
        email_error: (!is_valid_email(email)).then_some(EMAIL_ERROR),
        message_error: (message.chars().count() < MIN_MESSAGE_CHARS).then_some(MESSAGE_ERROR),
    }
}
