/// What a visitor wants to hear about, picked from the contact page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Taster,
    Ages7To11,
    Ages12To16,
    SchoolPartnership,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::Taster,
        Interest::Ages7To11,
        Interest::Ages12To16,
        Interest::SchoolPartnership,
        Interest::Other,
    ];

    /// Value sent to the email template and used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Taster => "taster",
            Interest::Ages7To11 => "7-11",
            Interest::Ages12To16 => "12-16",
            Interest::SchoolPartnership => "school",
            Interest::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Taster => "Free taster session",
            Interest::Ages7To11 => "Program for ages 7-11",
            Interest::Ages12To16 => "Program for ages 12-16",
            Interest::SchoolPartnership => "School partnership",
            Interest::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Result<Interest, String> {
        match s.trim() {
            "taster" => Ok(Interest::Taster),
            "7-11" | "age-7-11" => Ok(Interest::Ages7To11),
            "12-16" | "age-12-16" => Ok(Interest::Ages12To16),
            "school" | "school-partnership" => Ok(Interest::SchoolPartnership),
            "other" => Ok(Interest::Other),
            other => Err(format!("{} is not one of the offered interests.", other)),
        }
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
