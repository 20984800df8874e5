//! Typed form submission.

use serde::{Deserialize, Serialize};

/// Metadata for an attached file. The core never reads file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// Content type declared by the client, e.g. `image/png`.
    pub content_type: String,
    #[serde(default)]
    pub filename: Option<String>,
}

impl DocumentUpload {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            filename: None,
        }
    }
}

/// Field values of one personal/address record submission.
///
/// `None` means the field was not submitted at all; `Some("")` means it was
/// submitted empty. Both fail a required check, but only a present value
/// reaches the format checks. `document1`/`document2` are `None` when no file
/// was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub name: Option<String>,
    pub kana: Option<String>,
    pub birth_year: Option<String>,
    pub birth_month: Option<String>,
    pub birth_day: Option<String>,
    pub postal_code: Option<String>,
    pub prefecture: Option<String>,
    pub city_town: Option<String>,
    pub building: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub document1: Option<DocumentUpload>,
    pub document2: Option<DocumentUpload>,
}

impl Submission {
    /// Build a submission from raw `name -> value` form pairs.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Submission::default();
        for (key, value) in fields {
            let slot = match key.as_ref() {
                "name" => &mut submission.name,
                "kana" => &mut submission.kana,
                "birth_year" => &mut submission.birth_year,
                "birth_month" => &mut submission.birth_month,
                "birth_day" => &mut submission.birth_day,
                "postal_code" => &mut submission.postal_code,
                "prefecture" => &mut submission.prefecture,
                "city_town" => &mut submission.city_town,
                "building" => &mut submission.building,
                "tel" => &mut submission.tel,
                "email" => &mut submission.email,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        submission
    }

    pub fn with_document1(mut self, document: DocumentUpload) -> Self {
        self.document1 = Some(document);
        self
    }

    pub fn with_document2(mut self, document: DocumentUpload) -> Self {
        self.document2 = Some(document);
        self
    }
}
