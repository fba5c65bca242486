pub struct VerseTag;

impl VerseTag {
    pub const OPEN: &'static str = "[VERSE title=\"";
    pub const TITLE_CLOSE: &'static str = "\"]";
    pub const CLOSE: &'static str = "[/VERSE]";
}
