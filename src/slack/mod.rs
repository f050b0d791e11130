pub mod slash_command;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Message(Message),
    AttachedMessage(AttachedMessage),
}

impl Response {
    pub fn response_type(&self) -> ResponseType {
        match *self {
            Response::Message(ref m) => m.response_type,
            Response::AttachedMessage(ref m) => m.response_type,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub response_type: ResponseType,
    pub text: String,
    pub mrkdwn: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttachedMessage {
    pub response_type: ResponseType,
    pub attachments: Vec<Attachment>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    #[serde(rename = "in_channel")]
    InChannel,
    #[serde(rename = "ephemeral")]
    Ephemeral,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    pub pretext: String,
    pub text: String,
    pub fields: Vec<AttachmentFields>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub mrkdwn_in: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttachmentFields {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// A link button. Slack opens `url` in the client, no interaction payload is
/// sent back.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub url: String,
}

impl Action {
    pub fn link_button(text: &str, url: &str) -> Action {
        Action {
            kind: "button".to_owned(),
            text: text.to_owned(),
            url: url.to_owned(),
        }
    }
}

/// Escapes the three characters Slack treats as control sequences in
/// message text.
pub fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            _ => s.push(c),
        }
    }
    s
}

/// `<url|label>` hyperlink in mrkdwn.
pub fn link(url: &str, label: &str) -> String {
    format!("<{}|{}>", url, escape(label))
}
