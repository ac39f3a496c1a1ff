use std::fmt;

/// Supported messaging channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    WhatsApp,
    Telegram,
    Facebook,
    Instagram,
}

impl ChannelKind {
    /// Menu order, position 1 first
    pub const ALL: [ChannelKind; 4] = [
        ChannelKind::WhatsApp,
        ChannelKind::Telegram,
        ChannelKind::Facebook,
        ChannelKind::Instagram,
    ];

    /// Lowercase name accepted by the channel factory
    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "whatsapp",
            ChannelKind::Telegram => "telegram",
            ChannelKind::Facebook => "facebook",
            ChannelKind::Instagram => "instagram",
        }
    }

    /// Display label printed in notices
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::WhatsApp => "WhatsApp",
            ChannelKind::Telegram => "Telegram",
            ChannelKind::Facebook => "Facebook",
            ChannelKind::Instagram => "Instagram",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Map a 1-based menu position to a channel
    pub fn from_position(position: i32) -> Option<Self> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).map_or(0, |i| i + 1)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
