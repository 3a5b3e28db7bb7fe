use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use uuid::Uuid;

/// Kind of scan attached to a screening submission.
///
/// The two legacy upload forms disagreed on casing (`thermal` vs `Thermal`)
/// and on whether mammograms were offered at all; this enum is the single
/// authoritative set, and each form instance picks the subset it exposes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, StrumDisplay, EnumString)]
pub enum ImageType {
    #[serde(rename = "MRI")]
    #[strum(serialize = "MRI")]
    Mri,
    Thermal,
    Mammogram,
}

impl ImageType {
    pub const ALL: [ImageType; 3] = [ImageType::Mri, ImageType::Thermal, ImageType::Mammogram];
}

impl Default for ImageType {
    fn default() -> Self {
        ImageType::Mri
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, StrumDisplay, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const ALL: [YesNo; 2] = [YesNo::No, YesNo::Yes];
}

impl Default for YesNo {
    fn default() -> Self {
        YesNo::No
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, StrumDisplay, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Density {
    Dense,
    Fatty,
    Scattered,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Dense, Density::Fatty, Density::Scattered];
}

impl Default for Density {
    fn default() -> Self {
        Density::Dense
    }
}

/// Patient questionnaire submitted alongside the image. Every field except
/// `age` always carries a default, so only `age` can be empty at submit time.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Questionnaire {
    pub age: String,
    pub image_type: ImageType,
    pub lump: YesNo,
    pub family: YesNo,
    pub density: Density,
}

impl Questionnaire {
    /// Text fields in the order they are appended to the multipart body.
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("age", self.age.clone()),
            ("image_type", self.image_type.to_string()),
            ("lump", self.lump.to_string()),
            ("family", self.family.to_string()),
            ("density", self.density.to_string()),
        ]
    }
}

/// One class weight in the diagnosis distribution, e.g. Benign/Malignant.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Display)]
#[display(fmt = "{}: {}", name, value)]
pub struct DiagnosisEntry {
    pub name: String,
    pub value: f64,
}

/// Payload returned by `POST /predict`. The report and recommendation blocks
/// are optional Markdown; an absent `diagnosis` array deserializes to an
/// empty one and the results view treats that as "no data".
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DiagnosisResult {
    #[serde(default)]
    pub diagnosis: Vec<DiagnosisEntry>,
    #[serde(default)]
    pub detailed_report: Option<String>,
    #[serde(default)]
    pub detailed_recommendations: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /api/groq-chat`. A missing `reply` is a soft failure the
/// UI papers over with a placeholder, not an error.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: ChatSender,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(sender: ChatSender, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_defaults() {
        let form = Questionnaire::default();
        assert!(form.age.is_empty());
        assert_eq!(form.image_type, ImageType::Mri);
        assert_eq!(form.lump, YesNo::No);
        assert_eq!(form.family, YesNo::No);
        assert_eq!(form.density, Density::Dense);
    }

    #[test]
    fn multipart_field_enumeration() {
        let form = Questionnaire {
            age: "52".into(),
            image_type: ImageType::Thermal,
            lump: YesNo::Yes,
            family: YesNo::No,
            density: Density::Scattered,
        };
        assert_eq!(
            form.fields(),
            [
                ("age", "52".to_string()),
                ("image_type", "Thermal".to_string()),
                ("lump", "yes".to_string()),
                ("family", "no".to_string()),
                ("density", "scattered".to_string()),
            ]
        );
    }

    #[test]
    fn image_type_wire_strings() {
        assert_eq!(ImageType::Mri.to_string(), "MRI");
        assert_eq!(ImageType::Thermal.to_string(), "Thermal");
        assert_eq!(ImageType::Mammogram.to_string(), "Mammogram");
        assert_eq!("MRI".parse::<ImageType>().unwrap(), ImageType::Mri);
    }

    #[test]
    fn diagnosis_result_from_backend_json() {
        let body = r###"{
            "diagnosis": [
                {"name": "Benign", "value": 70},
                {"name": "Malignant", "value": 30}
            ],
            "detailed_report": "## Report",
            "patient_id": "ignored-extra-field"
        }"###;
        let result: DiagnosisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.diagnosis.len(), 2);
        assert_eq!(result.diagnosis[0].name, "Benign");
        assert_eq!(result.diagnosis[0].value, 70.0);
        assert_eq!(result.detailed_report.as_deref(), Some("## Report"));
        assert!(result.detailed_recommendations.is_none());
    }

    #[test]
    fn diagnosis_result_without_diagnosis_field() {
        let result: DiagnosisResult = serde_json::from_str("{}").unwrap();
        assert!(result.diagnosis.is_empty());
    }

    #[test]
    fn chat_reply_missing_reply_is_soft() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert!(reply.reply.is_none());
    }

    #[test]
    fn diagnosis_entry_display() {
        let entry = DiagnosisEntry {
            name: "Benign".into(),
            value: 70.0,
        };
        assert_eq!(entry.to_string(), "Benign: 70");
    }
}
