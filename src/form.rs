//! The data-entry form a label is filled in from, independent of any UI toolkit.

use crate::generate::generate_pdf;
use crate::label::{EquipmentTagLabel, LabelFields, LabelKind, LabelVariant, StandardLabel};
use log::{error, info};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

const READY: &str = "Ready to generate PDF";
const CLEARED: &str = "Fields cleared";

/// One input on the form
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Price,
    ReturnLocation,
    Sku,
    Barcode,
    CheckoutDate,
    ReturnDate,
    Url,
}

impl FormField {
    /// The caption shown next to the input
    pub fn caption(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::ReturnLocation => "Return Location",
            FormField::Sku => "SKU",
            FormField::Barcode => "Barcode",
            FormField::CheckoutDate => "Checkout Date",
            FormField::ReturnDate => "Return Date",
            FormField::Url => "QR URL",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Description)
    }
}

impl LabelKind {
    /// The inputs a form for this kind of label shows, in display order
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            LabelKind::Standard => &[
                FormField::Title,
                FormField::Description,
                FormField::Price,
                FormField::Sku,
                FormField::Barcode,
            ],
            LabelKind::EquipmentTag => &[
                FormField::Title,
                FormField::Description,
                FormField::ReturnLocation,
                FormField::Sku,
                FormField::Barcode,
                FormField::CheckoutDate,
                FormField::ReturnDate,
                FormField::Url,
            ],
        }
    }

    fn sample(&self, field: FormField) -> &'static str {
        match (self, field) {
            (LabelKind::Standard, FormField::Title) => "Sample Product",
            (LabelKind::Standard, FormField::Description) => {
                "This is a sample product description that can span multiple lines. \
                 Long descriptions are wrapped to fit the label."
            }
            (LabelKind::Standard, FormField::Price) => "$19.99",
            (LabelKind::EquipmentTag, FormField::Title) => "Sample Equipment Tag",
            (LabelKind::EquipmentTag, FormField::Description) => {
                "This is a sample item description that can span multiple lines. \
                 We can see this as the default description is quite long."
            }
            (LabelKind::EquipmentTag, FormField::ReturnLocation) => "Engineering Hall 317",
            (LabelKind::EquipmentTag, FormField::CheckoutDate) => "01/15/2024",
            (LabelKind::EquipmentTag, FormField::ReturnDate) => "01/22/2024",
            (LabelKind::EquipmentTag, FormField::Url) => "https://example.com/product1",
            (_, FormField::Sku) => "SKU123456",
            (_, FormField::Barcode) => "1234567890123",
            _ => "",
        }
    }
}

/// What the user is told after pressing "Generate"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Success(_) => "Success",
            Notice::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

/// Current values of a label form plus its status line
#[derive(Debug, Clone)]
pub struct LabelForm {
    kind: LabelKind,
    values: HashMap<FormField, String>,
    status: String,
}

impl LabelForm {
    /// A form prefilled with sample values
    pub fn new(kind: LabelKind) -> LabelForm {
        let values = kind
            .fields()
            .iter()
            .map(|field| (*field, kind.sample(*field).to_string()))
            .collect();
        LabelForm {
            kind,
            values,
            status: READY.to_string(),
        }
    }

    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The value of `field`; empty for fields this kind of form does not have
    pub fn get(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set `field`, returning `false` if this kind of form has no such field. Line
    /// breaks in single-line fields become spaces.
    pub fn set<S: Into<String>>(&mut self, field: FormField, value: S) -> bool {
        let Some(slot) = self.values.get_mut(&field) else {
            return false;
        };
        let value = value.into();
        *slot = if field.is_multiline() {
            value
        } else {
            value.replace("\r\n", " ").replace(['\r', '\n'], " ")
        };
        true
    }

    /// Empty every field
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.status = CLEARED.to_string();
    }

    /// Copy the current values into an immutable [LabelFields]
    pub fn snapshot(&self) -> LabelFields {
        let value = |field| self.get(field).to_string();
        let variant = match self.kind {
            LabelKind::Standard => LabelVariant::Standard(StandardLabel {
                price: value(FormField::Price),
                sku: value(FormField::Sku),
                barcode: value(FormField::Barcode),
            }),
            LabelKind::EquipmentTag => LabelVariant::EquipmentTag(EquipmentTagLabel {
                return_location: value(FormField::ReturnLocation),
                sku: value(FormField::Sku),
                barcode: value(FormField::Barcode),
                checkout_date: value(FormField::CheckoutDate),
                return_date: value(FormField::ReturnDate),
                url: value(FormField::Url),
            }),
        };
        LabelFields {
            title: value(FormField::Title),
            description: value(FormField::Description),
            variant,
        }
    }

    /// The "Generate" action: write the label into `out_dir` and update the status
    pub fn generate(&mut self, out_dir: &Path) -> Notice {
        match generate_pdf(&self.snapshot(), out_dir) {
            Ok(path) => {
                let message = format!("PDF saved: {}", path.display());
                info!("{message}");
                self.status = message.clone();
                Notice::Success(message)
            }
            Err(e) => {
                let message = e.to_string();
                error!("could not generate label: {message}");
                self.status = format!("Error: {message}");
                Notice::Error(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_forms_are_prefilled() {
        let mut form = LabelForm::new(LabelKind::EquipmentTag);
        assert_eq!(form.status(), "Ready to generate PDF");
        assert_eq!(form.get(FormField::Title), "Sample Equipment Tag");
        assert_eq!(form.get(FormField::ReturnLocation), "Engineering Hall 317");
        form.set(FormField::Sku, "EQ\r\n7");
        assert_eq!(form.get(FormField::Sku), "EQ 7");
        assert_eq!(form.get(FormField::Url), "https://example.com/product1");
        assert_eq!(form.get(FormField::Price), "");

        let form = LabelForm::new(LabelKind::Standard);
        assert_eq!(form.get(FormField::Price), "$19.99");
        assert_eq!(form.get(FormField::Sku), "SKU123456");
    }

    #[test]
    fn fields_outside_the_kind_cannot_be_set() {
        let mut form = LabelForm::new(LabelKind::Standard);
        assert!(!form.set(FormField::Url, "https://example.com"));
        assert!(form.set(FormField::Price, "$5.00"));
        assert_eq!(form.get(FormField::Price), "$5.00");
    }

    #[test]
    fn only_the_description_is_multiline() {
        for field in LabelKind::EquipmentTag.fields() {
            assert_eq!(field.is_multiline(), *field == FormField::Description);
        }
    }

    #[test]
    fn single_line_fields_drop_line_breaks() {
        let mut form = LabelForm::new(LabelKind::EquipmentTag);
        form.set(FormField::ReturnLocation, "Engineering\nHall 317");
        assert_eq!(form.get(FormField::ReturnLocation), "Engineering Hall 317");
        form.set(FormField::Sku, "EQ\r\n7");
        assert_eq!(form.get(FormField::Sku), "EQ 7");
        form.set(FormField::Description, "first\nsecond");
        assert_eq!(form.get(FormField::Description), "first\nsecond");
    }

    #[test]
    fn clear_empties_everything() {
        let mut form = LabelForm::new(LabelKind::EquipmentTag);
        form.clear();
        assert_eq!(form.status(), "Fields cleared");
        for field in LabelKind::EquipmentTag.fields() {
            assert_eq!(form.get(*field), "");
        }
    }

    #[test]
    fn snapshots_are_detached_from_the_form() {
        let mut form = LabelForm::new(LabelKind::EquipmentTag);
        let snapshot = form.snapshot();
        form.set(FormField::Title, "changed");
        assert_eq!(snapshot.title, "Sample Equipment Tag");
        assert_eq!(snapshot.kind(), LabelKind::EquipmentTag);
        assert_eq!(snapshot.variant.sku(), "SKU123456");
    }

    #[test]
    fn generate_reports_errors_in_the_status() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let mut form = LabelForm::new(LabelKind::Standard);
        form.clear();
        let notice = form.generate(dir.path());
        assert_eq!(notice, Notice::Error("title is required".into()));
        assert_eq!(notice.title(), "Error");
        assert_eq!(form.status(), "Error: title is required");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_writes_are_not_reported_as_saved() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        std::os::unix::fs::symlink("/dev/full", dir.path().join("label_SKU123456.pdf"))
            .expect("can link to /dev/full");
        let mut form = LabelForm::new(LabelKind::Standard);
        let notice = form.generate(dir.path());
        assert!(notice.is_error(), "{notice}");
        assert!(notice.message().starts_with("failed to save PDF: "));
        assert!(form.status().starts_with("Error: failed to save PDF: "));
    }

    #[test]
    fn generate_reports_the_saved_path() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let mut form = LabelForm::new(LabelKind::EquipmentTag);
        form.set(FormField::Sku, "EQ 7");
        let notice = form.generate(dir.path());
        assert!(!notice.is_error(), "{notice}");
        assert!(notice.message().starts_with("PDF saved: "));
        assert!(notice.message().ends_with("label_EQ_7.pdf"));
        assert_eq!(form.status(), notice.message());
    }
}
