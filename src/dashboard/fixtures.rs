//! Built-in sample collections used when no data directory is configured.

use super::records::{
    Channel, ChatSession, Employee, Invitation, InvitationStatus, KnowledgeEntry, KnowledgeKind,
    Role, SessionStatus,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// 2024-06-01 09:00:00 UTC
const BASE_TIMESTAMP: i64 = 1_717_232_400;

const EMPLOYEES: &[(&str, &str, Role, bool)] = &[
    ("Mona Adel", "mona@kalamna.ai", Role::Owner, true),
    ("Omar Hassan", "omar@kalamna.ai", Role::Admin, true),
    ("Sara Nabil", "sara@kalamna.ai", Role::Admin, true),
    ("Youssef Tarek", "youssef@kalamna.ai", Role::Agent, true),
    ("Laila Samir", "laila@kalamna.ai", Role::Agent, true),
    ("Karim Fathy", "karim@kalamna.ai", Role::Agent, false),
    ("Nour Khaled", "nour@kalamna.ai", Role::Agent, true),
    ("Ahmed Ali", "ahmed@kalamna.ai", Role::Agent, true),
    ("Hana Mostafa", "hana@kalamna.ai", Role::Agent, false),
    ("Ziad Ibrahim", "ziad@kalamna.ai", Role::Agent, true),
    ("Rana Wael", "rana@kalamna.ai", Role::Admin, true),
    ("Tamer Saad", "tamer@kalamna.ai", Role::Agent, true),
];

const INVITATIONS: &[(&str, Role, InvitationStatus)] = &[
    ("dina@example.com", Role::Agent, InvitationStatus::Pending),
    ("hossam@example.com", Role::Admin, InvitationStatus::Accepted),
    ("maha@example.com", Role::Agent, InvitationStatus::Expired),
    ("sherif@example.com", Role::Agent, InvitationStatus::Pending),
    ("yasmin@example.com", Role::Agent, InvitationStatus::Accepted),
    ("adham@example.com", Role::Admin, InvitationStatus::Pending),
    ("farida@example.com", Role::Agent, InvitationStatus::Expired),
];

const KNOWLEDGE: &[(&str, KnowledgeKind)] = &[
    ("Refund policy", KnowledgeKind::Faq),
    ("Shipping times by region", KnowledgeKind::Article),
    ("How to reset a password", KnowledgeKind::Faq),
    ("Pricing page", KnowledgeKind::Link),
    ("Terms of service", KnowledgeKind::Document),
    ("Opening hours", KnowledgeKind::Faq),
    ("Order tracking guide", KnowledgeKind::Article),
    ("Warranty coverage", KnowledgeKind::Document),
    ("Payment methods", KnowledgeKind::Faq),
    ("Store locations", KnowledgeKind::Link),
    ("Cancelling an order", KnowledgeKind::Faq),
    ("Product care instructions", KnowledgeKind::Article),
    ("Privacy policy", KnowledgeKind::Document),
    ("Gift cards", KnowledgeKind::Faq),
    ("Loyalty program", KnowledgeKind::Article),
    ("Contact support", KnowledgeKind::Link),
    ("Returns checklist", KnowledgeKind::Document),
    ("Delivery fees", KnowledgeKind::Faq),
    ("Size guide", KnowledgeKind::Article),
    ("Mobile app download", KnowledgeKind::Link),
    ("Bulk order discounts", KnowledgeKind::Faq),
    ("Installment plans", KnowledgeKind::Article),
    ("Company profile", KnowledgeKind::Document),
];

const CUSTOMERS: &[&str] = &[
    "Ali Mahmoud",
    "Salma Youssef",
    "Mahmoud Reda",
    "Aya Gamal",
    "Hassan Zaki",
    "Mariam Fouad",
];

const CHANNELS: &[Channel] = &[Channel::Web, Channel::Whatsapp, Channel::Messenger];

const SESSION_STATUSES: &[SessionStatus] = &[
    SessionStatus::Resolved,
    SessionStatus::Open,
    SessionStatus::Resolved,
    SessionStatus::Escalated,
];

/// Number of generated chat sessions
const SESSION_COUNT: usize = 48;

pub fn employees() -> Vec<Employee> {
    EMPLOYEES
        .iter()
        .enumerate()
        .map(|(i, (name, email, role, active))| Employee {
            id: format!("emp-{}", i + 1),
            name: name.to_string(),
            email: email.to_string(),
            role: *role,
            active: *active,
        })
        .collect()
}

pub fn invitations() -> Vec<Invitation> {
    INVITATIONS
        .iter()
        .enumerate()
        .map(|(i, (email, role, status))| Invitation {
            id: format!("inv-{}", i + 1),
            email: email.to_string(),
            role: *role,
            status: *status,
            sent_at: base_time() - Duration::days(i as i64 * 3),
        })
        .collect()
}

pub fn knowledge_entries() -> Vec<KnowledgeEntry> {
    KNOWLEDGE
        .iter()
        .enumerate()
        .map(|(i, (title, kind))| KnowledgeEntry {
            id: format!("kb-{}", i + 1),
            title: title.to_string(),
            kind: *kind,
            updated_at: base_time() - Duration::days(i as i64),
        })
        .collect()
}

pub fn chat_sessions() -> Vec<ChatSession> {
    (0..SESSION_COUNT)
        .map(|i| ChatSession {
            id: format!("chat-{}", i + 1),
            customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
            channel: CHANNELS[i % CHANNELS.len()],
            messages: 3 + (i as u32 * 7) % 40,
            status: SESSION_STATUSES[i % SESSION_STATUSES.len()],
            started_at: base_time() - Duration::minutes(i as i64 * 95),
        })
        .collect()
}

fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(BASE_TIMESTAMP, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Record;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(knowledge_entries().len(), 23);
        assert_eq!(employees().len(), 12);
        assert_eq!(invitations().len(), 7);
        assert_eq!(chat_sessions().len(), SESSION_COUNT);
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let sessions = chat_sessions();
        let ids: HashSet<&str> = sessions.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), sessions.len());
    }

    #[test]
    fn test_base_time() {
        assert_eq!(
            base_time().format("%Y-%m-%d %H:%M").to_string(),
            "2024-06-01 09:00"
        );
    }
}
