//! The twelve-category spiritual-gift taxonomy.
//!
//! The 60-question assessment is scored against these categories; ministry
//! opportunities reference them by key in their required/preferred lists.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SpiritualGift {
    /// Stable identifier used in opportunity records and member profiles.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SPIRITUAL_GIFTS: [SpiritualGift; 12] = [
    SpiritualGift {
        key: "LEADERSHIP_ORG",
        name: "Leadership",
        description: "Casting vision, organizing people and resources, and guiding a group toward a shared goal.",
    },
    SpiritualGift {
        key: "TEACHING",
        name: "Teaching",
        description: "Explaining scripture and doctrine clearly so that others understand and grow.",
    },
    SpiritualGift {
        key: "WISDOM",
        name: "Wisdom",
        description: "Applying knowledge and experience to give sound, practical counsel.",
    },
    SpiritualGift {
        key: "PROPHETIC",
        name: "Prophetic Discernment",
        description: "Perceiving spiritual truth and speaking it with conviction, even when uncomfortable.",
    },
    SpiritualGift {
        key: "EXHORTATION",
        name: "Exhortation",
        description: "Encouraging, challenging and motivating others toward growth and perseverance.",
    },
    SpiritualGift {
        key: "SHEPHERDING",
        name: "Shepherding",
        description: "Nurturing and protecting a group of people over the long haul, walking with them personally.",
    },
    SpiritualGift {
        key: "FAITH",
        name: "Faith",
        description: "Trusting God confidently in circumstances where outcomes are uncertain, and inspiring the same in others.",
    },
    SpiritualGift {
        key: "EVANGELISM",
        name: "Evangelism",
        description: "Communicating the gospel naturally and persuasively to people outside the church.",
    },
    SpiritualGift {
        key: "APOSTLESHIP",
        name: "Apostleship",
        description: "Pioneering new ministries, churches or initiatives where none exist yet.",
    },
    SpiritualGift {
        key: "SERVICE_HOSPITALITY",
        name: "Service & Hospitality",
        description: "Meeting practical needs gladly and making people feel genuinely welcome.",
    },
    SpiritualGift {
        key: "MERCY",
        name: "Mercy",
        description: "Feeling and acting on compassion for people who are hurting, without judgment.",
    },
    SpiritualGift {
        key: "GIVING",
        name: "Giving",
        description: "Contributing material resources generously, cheerfully and wisely.",
    },
];
