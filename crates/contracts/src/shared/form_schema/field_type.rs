//! Input kinds supported by the resource editor

/// Which input widget renders the field and how its raw text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    TextArea,
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    Time,
    Email,
    Phone,
    Password,
    /// Id picked from a lookup list; the string names the lookup
    Select(&'static str),
    /// Id picked through the paginated movie selector
    Movie,
}

impl FieldKind {
    /// `type` attribute for plain `<input>` kinds
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Password => "password",
            Self::Text | Self::TextArea | Self::Select(_) | Self::Movie => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}
