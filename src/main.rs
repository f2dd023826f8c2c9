// label-gen: fill in a 4x6 label form and render it to PDF

use clap::{Parser, ValueEnum};
use label_gen::{FormField, LabelForm, LabelKind};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Variant {
    /// Portrait product label with price, SKU and barcode
    Standard,
    /// Landscape equipment tag with borrow details and a QR code
    EquipmentTag,
}

impl From<Variant> for LabelKind {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Standard => LabelKind::Standard,
            Variant::EquipmentTag => LabelKind::EquipmentTag,
        }
    }
}

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate 4x6 inch PDF labels")]
struct Args {
    /// Kind of label to generate
    #[arg(long, value_enum, default_value_t = Variant::EquipmentTag)]
    variant: Variant,

    /// Start from an empty form instead of the sample values
    #[arg(long)]
    clear: bool,

    /// Directory the PDF is written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Standard labels only
    #[arg(long)]
    price: Option<String>,

    /// Equipment tags only
    #[arg(long)]
    return_location: Option<String>,

    #[arg(long)]
    sku: Option<String>,

    #[arg(long)]
    barcode: Option<String>,

    /// Equipment tags only
    #[arg(long)]
    checkout_date: Option<String>,

    /// Equipment tags only
    #[arg(long)]
    return_date: Option<String>,

    /// URL encoded as a QR code (equipment tags only, blank for none)
    #[arg(long)]
    url: Option<String>,
}

impl Args {
    fn overrides(&self) -> [(FormField, &Option<String>); 9] {
        [
            (FormField::Title, &self.title),
            (FormField::Description, &self.description),
            (FormField::Price, &self.price),
            (FormField::ReturnLocation, &self.return_location),
            (FormField::Sku, &self.sku),
            (FormField::Barcode, &self.barcode),
            (FormField::CheckoutDate, &self.checkout_date),
            (FormField::ReturnDate, &self.return_date),
            (FormField::Url, &self.url),
        ]
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let kind: LabelKind = args.variant.into();

    let mut form = LabelForm::new(kind);
    if args.clear {
        form.clear();
        println!("{}", form.status());
    }
    for (field, value) in args.overrides() {
        if let Some(value) = value {
            if !form.set(field, value.as_str()) {
                warn!("--{} does not apply to {:?} labels", flag(field), kind);
            }
        }
    }

    let notice = form.generate(&args.output_dir);
    println!("{}", form.status());
    if notice.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn flag(field: FormField) -> &'static str {
    match field {
        FormField::Title => "title",
        FormField::Description => "description",
        FormField::Price => "price",
        FormField::ReturnLocation => "return-location",
        FormField::Sku => "sku",
        FormField::Barcode => "barcode",
        FormField::CheckoutDate => "checkout-date",
        FormField::ReturnDate => "return-date",
        FormField::Url => "url",
    }
}
