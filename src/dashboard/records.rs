use super::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Admin,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Agent => "agent",
        }
    }
}

/// Staff member with access to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

impl Record for Employee {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Role", "Status"]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.as_str().to_string(),
            if self.active { "active" } else { "inactive" }.to_string(),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.email).to_lowercase()
    }

    fn kind(&self) -> Option<&'static str> {
        Some(self.role.as_str())
    }

    fn kinds() -> &'static [&'static str] {
        &["owner", "admin", "agent"]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
}

impl InvitationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Expired => "expired",
        }
    }
}

/// Invitation sent to a prospective employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub status: InvitationStatus,
    pub sent_at: DateTime<Utc>,
}

impl Record for Invitation {
    fn headers() -> &'static [&'static str] {
        &["Email", "Role", "Status", "Sent"]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.role.as_str().to_string(),
            self.status.as_str().to_string(),
            self.sent_at.format(DATE_FORMAT).to_string(),
        ]
    }

    fn search_text(&self) -> String {
        self.email.to_lowercase()
    }

    fn kind(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn kinds() -> &'static [&'static str] {
        &["pending", "accepted", "expired"]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeKind {
    Faq,
    Article,
    Link,
    Document,
}

impl KnowledgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeKind::Faq => "faq",
            KnowledgeKind::Article => "article",
            KnowledgeKind::Link => "link",
            KnowledgeKind::Document => "document",
        }
    }
}

/// Knowledge-base entry the bot answers from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub title: String,
    pub kind: KnowledgeKind,
    pub updated_at: DateTime<Utc>,
}

impl Record for KnowledgeEntry {
    fn headers() -> &'static [&'static str] {
        &["Title", "Type", "Updated"]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.kind.as_str().to_string(),
            self.updated_at.format(DATE_FORMAT).to_string(),
        ]
    }

    fn search_text(&self) -> String {
        self.title.to_lowercase()
    }

    fn kind(&self) -> Option<&'static str> {
        Some(self.kind.as_str())
    }

    fn kinds() -> &'static [&'static str] {
        &["faq", "article", "link", "document"]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Web,
    Whatsapp,
    Messenger,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Web => "web",
            Channel::Whatsapp => "whatsapp",
            Channel::Messenger => "messenger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Open,
    Resolved,
    Escalated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Open => "open",
            SessionStatus::Resolved => "resolved",
            SessionStatus::Escalated => "escalated",
        }
    }
}

/// Conversation between a customer and the bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub customer: String,
    pub channel: Channel,
    pub messages: u32,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
}

impl Record for ChatSession {
    fn headers() -> &'static [&'static str] {
        &["Customer", "Channel", "Messages", "Status", "Started"]
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.customer.clone(),
            self.channel.as_str().to_string(),
            self.messages.to_string(),
            self.status.as_str().to_string(),
            self.started_at.format(TIME_FORMAT).to_string(),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.customer, self.channel.as_str()).to_lowercase()
    }

    fn kind(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }

    fn kinds() -> &'static [&'static str] {
        &["open", "resolved", "escalated"]
    }
}
