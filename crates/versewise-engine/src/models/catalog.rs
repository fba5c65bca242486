/// A scripture the assistant can be asked about.
///
/// The catalog is compiled in: the picker, the query payload, and the
/// welcome-screen suggestions all read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scripture {
    pub id: &'static str,
    pub name: &'static str,
    /// Tradition the scripture belongs to, sent as `religion` in queries.
    pub tradition: &'static str,
    pub tagline: &'static str,
    pub suggested_questions: [&'static str; 3],
}

pub fn builtin_scriptures() -> &'static [Scripture] {
    SCRIPTURES
}

/// Looks up a scripture by its stable id.
pub fn find_scripture(id: &str) -> Option<&'static Scripture> {
    SCRIPTURES.iter().find(|s| s.id == id)
}

static SCRIPTURES: &[Scripture] = &[
    Scripture {
        id: "bhagavad-gita",
        name: "Bhagavad Gita",
        tradition: "Hinduism",
        tagline: "Duty, devotion, and the stillness behind action.",
        suggested_questions: [
            "What is the central message?",
            "Teach me about the core teachings",
            "How to find inner peace?",
        ],
    },
    Scripture {
        id: "dhammapada",
        name: "Dhammapada",
        tradition: "Buddhism",
        tagline: "The path of the mind, verse by verse.",
        suggested_questions: [
            "What is the central message?",
            "What does it say about craving?",
            "How to find inner peace?",
        ],
    },
    Scripture {
        id: "bible",
        name: "The Bible",
        tradition: "Christianity",
        tagline: "Covenant, grace, and the long arc of redemption.",
        suggested_questions: [
            "What is the central message?",
            "Teach me about the core teachings",
            "What does it say about forgiveness?",
        ],
    },
    Scripture {
        id: "quran",
        name: "The Quran",
        tradition: "Islam",
        tagline: "Guidance and mercy, recited.",
        suggested_questions: [
            "What is the central message?",
            "Teach me about the core teachings",
            "What does it say about charity?",
        ],
    },
    Scripture {
        id: "tao-te-ching",
        name: "Tao Te Ching",
        tradition: "Taoism",
        tagline: "The way that can be walked without striving.",
        suggested_questions: [
            "What is the central message?",
            "What is wu wei?",
            "How to find inner peace?",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_non_empty_with_unique_ids() {
        let scriptures = builtin_scriptures();
        assert!(!scriptures.is_empty());
        for (i, a) in scriptures.iter().enumerate() {
            for b in &scriptures[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_scripture_by_id() {
        assert_eq!(find_scripture("bhagavad-gita").unwrap().name, "Bhagavad Gita");
        assert!(find_scripture("nope").is_none());
    }
}
