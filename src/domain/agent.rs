// src/domain/agent.rs

use indexmap::IndexMap;

/// The office/agent designations that appear on roster lines of an export,
/// e.g. `LA: Jane Doe (Phone): 555-1111`.
///
/// Declaration order is column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    ListingOffice,
    ListingAgent,
    CoListingAgent,
    SellingOffice,
    SellingAgent,
    CoSellingAgent,
}

impl AgentRole {
    pub const ALL: [AgentRole; 6] = [
        AgentRole::ListingOffice,
        AgentRole::ListingAgent,
        AgentRole::CoListingAgent,
        AgentRole::SellingOffice,
        AgentRole::SellingAgent,
        AgentRole::CoSellingAgent,
    ];

    /// Token that starts the roster line and prefixes the output columns.
    pub fn designation(&self) -> &'static str {
        match self {
            AgentRole::ListingOffice => "LO",
            AgentRole::ListingAgent => "LA",
            AgentRole::CoListingAgent => "CO-LA",
            AgentRole::SellingOffice => "SO",
            AgentRole::SellingAgent => "SA",
            AgentRole::CoSellingAgent => "CO-SA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::ListingOffice => "Listing Office",
            AgentRole::ListingAgent => "Listing Agent",
            AgentRole::CoListingAgent => "Co-Listing Agent",
            AgentRole::SellingOffice => "Selling Office",
            AgentRole::SellingAgent => "Selling Agent",
            AgentRole::CoSellingAgent => "Co-Selling Agent",
        }
    }

    pub fn name_column(&self) -> String {
        format!("{} Name", self.designation())
    }

    pub fn channel_column(&self, channel: ContactChannel) -> String {
        format!("{} {}", self.designation(), channel.as_str())
    }

    /// Name column followed by one column per channel.
    pub fn columns(&self) -> Vec<String> {
        let mut cols = vec![self.name_column()];
        cols.extend(
            ContactChannel::ALL
                .iter()
                .map(|channel| self.channel_column(*channel)),
        );
        cols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactChannel {
    Phone,
    Mobile,
    Office,
    Email,
    Fax,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 5] = [
        ContactChannel::Phone,
        ContactChannel::Mobile,
        ContactChannel::Office,
        ContactChannel::Email,
        ContactChannel::Fax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "Phone",
            ContactChannel::Mobile => "Mobile",
            ContactChannel::Office => "Office",
            ContactChannel::Email => "Email",
            ContactChannel::Fax => "Fax",
        }
    }

    /// Matches a parenthesized label from the export, ignoring case and
    /// whitespace: `(Phone)`, `( phone )` and `(E mail)` all resolve.
    pub fn from_label(label: &str) -> Option<Self> {
        let folded: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match folded.as_str() {
            "phone" => Some(ContactChannel::Phone),
            "mobile" => Some(ContactChannel::Mobile),
            "office" => Some(ContactChannel::Office),
            "email" => Some(ContactChannel::Email),
            "fax" => Some(ContactChannel::Fax),
            _ => None,
        }
    }
}

/// Name plus per-channel contact values for one role in one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet {
    pub name: String,
    pub contacts: IndexMap<ContactChannel, String>,
}

impl ContactSet {
    /// Value for a channel, empty when the roster line did not carry it.
    pub fn get(&self, channel: ContactChannel) -> &str {
        self.contacts.get(&channel).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contacts.values().all(|v| v.is_empty())
    }
}
