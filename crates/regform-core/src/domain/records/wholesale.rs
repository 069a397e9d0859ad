//! Wholesale buyer registration record

use super::sections::*;
use crate::domain::schema::{
    FieldKind, FieldRule, FieldSpec, FieldValue, FormCopy, FormVariant, RegistrationRecord,
};
use crate::domain::value_objects::{
    Answer, AutoShip, FileRef, PaymentMethod, SignatureArtifact, WholesaleBusinessType,
    WholesaleShipping, YesNo,
};
use crate::error::Result;

const COMPLIANCE: &str = "Compliance & Certification (Health Supplement Specific)";
const AUTO_SHIP: &str = "Auto-Ship Program";

registration_record! {
    /// Wholesale buyer application
    WholesaleRecord, WholesaleField, WholesaleEdit {
        company_name: String, text => CompanyName = "companyName";
        contact_person_first_name: String, text => ContactPersonFirstName = "contactPersonFirstName";
        contact_person_last_name: String, text => ContactPersonLastName = "contactPersonLastName";
        title_position: String, text => TitlePosition = "titlePosition";
        street: String, text => Street = "street";
        city: String, text => City = "city";
        state: String, text => State = "state";
        zip_code: String, text => ZipCode = "zipCode";
        phone_number: String, text => PhoneNumber = "phoneNumber";
        email_address: String, text => EmailAddress = "emailAddress";
        website: String, text => Website = "website";
        business_type: Option<WholesaleBusinessType>, choice => BusinessType = "businessType";
        other_business_type: String, text => OtherBusinessType = "otherBusinessType";
        years_in_business: String, text => YearsInBusiness = "yearsInBusiness";
        monthly_purchase_volume: String, text => MonthlyPurchaseVolume = "monthlyPurchaseVolume";
        #[serde(rename = "federalEIN")]
        federal_ein: String, text => FederalEin = "federalEIN";
        resale_certificate_number: String, text => ResaleCertificateNumber = "resaleCertificateNumber";
        resale_certificate_file: Option<FileRef>, file => ResaleCertificateFile = "resaleCertificateFile";
        sells_supplements: Option<YesNo>, choice => SellsSupplements = "sellsSupplements";
        comply_with_laws: Option<YesNo>, choice => ComplyWithLaws = "complyWithLaws";
        sells_on_third_party: Option<YesNo>, choice => SellsOnThirdParty = "sellsOnThirdParty";
        third_party_platforms: String, text => ThirdPartyPlatforms = "thirdPartyPlatforms";
        preferred_payment_method: Option<PaymentMethod>, choice => PreferredPaymentMethod = "preferredPaymentMethod";
        other_payment_method: String, text => OtherPaymentMethod = "otherPaymentMethod";
        preferred_shipping_method: Option<WholesaleShipping>, choice => PreferredShippingMethod = "preferredShippingMethod";
        other_shipping_method: String, text => OtherShippingMethod = "otherShippingMethod";
        has_loading_dock: Option<YesNo>, choice => HasLoadingDock = "hasLoadingDock";
        auto_ship_enrollment: Option<AutoShip>, choice => AutoShipEnrollment = "autoShipEnrollment";
        agreement_confirmed: bool, flag => AgreementConfirmed = "agreementConfirmed";
        signature: Option<SignatureArtifact>, signature => Signature = "signature";
        signature_date: String, date => SignatureDate = "signatureDate";
    }
}

use WholesaleField as F;

static SCHEMA: [FieldSpec<WholesaleField>; 31] = [
    FieldSpec::new(F::CompanyName, COMPANY, "Company Name", FieldKind::Text).required(),
    FieldSpec::new(F::TitlePosition, COMPANY, "Title/Position", FieldKind::Text).required(),
    FieldSpec::new(F::ContactPersonFirstName, COMPANY, "Contact Person First Name", FieldKind::Text).required(),
    FieldSpec::new(F::ContactPersonLastName, COMPANY, "Contact Person Last Name", FieldKind::Text).required(),
    FieldSpec::new(F::Street, ADDRESS, "Street Address", FieldKind::Text).required(),
    FieldSpec::new(F::City, ADDRESS, "City", FieldKind::Text).required(),
    FieldSpec::new(F::State, ADDRESS, "State", FieldKind::Text).required(),
    FieldSpec::new(F::ZipCode, ADDRESS, "ZIP Code", FieldKind::Text).required(),
    FieldSpec::new(F::PhoneNumber, CONTACT, "Phone Number", FieldKind::Text)
        .required()
        .rule(FieldRule::Phone),
    FieldSpec::new(F::EmailAddress, CONTACT, "Email Address", FieldKind::Text)
        .required()
        .rule(FieldRule::Email),
    FieldSpec::new(F::Website, CONTACT, "Website (if applicable)", FieldKind::Text),
    FieldSpec::new(
        F::BusinessType,
        BUSINESS,
        "Type of Business",
        FieldKind::SingleSelect(WholesaleBusinessType::LABELS),
    )
    .required(),
    FieldSpec::new(F::OtherBusinessType, BUSINESS, "Please specify", FieldKind::Text)
        .revealed_by(F::BusinessType, "Other"),
    FieldSpec::new(F::YearsInBusiness, BUSINESS, "Years in Business", FieldKind::Text).required(),
    FieldSpec::new(F::MonthlyPurchaseVolume, BUSINESS, "Estimated Monthly Purchase Volume", FieldKind::Text)
        .required(),
    FieldSpec::new(F::FederalEin, LEGAL, "Federal EIN / Tax ID Number", FieldKind::Text).required(),
    FieldSpec::new(
        F::ResaleCertificateNumber,
        LEGAL,
        "State Resale/Tax Exemption Certificate Number",
        FieldKind::Text,
    )
    .required(),
    FieldSpec::new(F::ResaleCertificateFile, LEGAL, "Upload Resale Certificate", FieldKind::File),
    FieldSpec::new(
        F::SellsSupplements,
        COMPLIANCE,
        "Do you currently sell dietary/health supplements?",
        FieldKind::SingleSelect(YesNo::LABELS),
    )
    .required(),
    FieldSpec::new(
        F::ComplyWithLaws,
        COMPLIANCE,
        "Do you agree to comply with FDA, FTC, and state laws regarding the sale and marketing of dietary supplements?",
        FieldKind::SingleSelect(YesNo::LABELS),
    )
    .required(),
    FieldSpec::new(
        F::SellsOnThirdParty,
        COMPLIANCE,
        "Will you be selling products on 3rd-party platforms (e.g., Amazon, eBay, Walmart)?",
        FieldKind::SingleSelect(YesNo::LABELS),
    )
    .required(),
    FieldSpec::new(F::ThirdPartyPlatforms, COMPLIANCE, "Please specify platforms", FieldKind::Text)
        .revealed_by(F::SellsOnThirdParty, "Yes"),
    FieldSpec::new(
        F::PreferredPaymentMethod,
        PAYMENT_SHIPPING,
        "Preferred Payment Method",
        FieldKind::SingleSelect(PaymentMethod::LABELS),
    )
    .required(),
    FieldSpec::new(F::OtherPaymentMethod, PAYMENT_SHIPPING, "Please specify payment method", FieldKind::Text)
        .revealed_by(F::PreferredPaymentMethod, "Other"),
    FieldSpec::new(
        F::PreferredShippingMethod,
        PAYMENT_SHIPPING,
        "Preferred Shipping Method",
        FieldKind::SingleSelect(WholesaleShipping::LABELS),
    )
    .required(),
    FieldSpec::new(F::OtherShippingMethod, PAYMENT_SHIPPING, "Please specify shipping method", FieldKind::Text)
        .revealed_by(F::PreferredShippingMethod, "Other"),
    FieldSpec::new(
        F::HasLoadingDock,
        PAYMENT_SHIPPING,
        "Do you have a loading dock for pallet shipments?",
        FieldKind::SingleSelect(YesNo::LABELS),
    )
    .required(),
    FieldSpec::new(
        F::AutoShipEnrollment,
        AUTO_SHIP,
        "Would you like to be enrolled in our monthly Auto-Ship program?",
        FieldKind::SingleSelect(AutoShip::LABELS),
    )
    .required(),
    FieldSpec::new(
        F::AgreementConfirmed,
        AGREEMENT,
        "I confirm that I have read and agree to all the terms stated above",
        FieldKind::Boolean,
    )
    .required()
    .rule(FieldRule::Agreement),
    FieldSpec::new(F::Signature, AGREEMENT, "Signature", FieldKind::Signature).required(),
    FieldSpec::new(F::SignatureDate, AGREEMENT, "Date", FieldKind::Date),
];

static COPY: FormCopy = FormCopy {
    title: "Wholesale Registration Form",
    subtitle: "Please fill out all required information to register for wholesale access",
    submitting: "Submitting your application...",
    success: "Registration application submitted successfully! We will review your application and get back to you within 2-3 business days.",
    success_duration_ms: 5000,
    failure: "Please fill in all required fields correctly before submitting.",
    agreement_clauses: &[
        "All information provided is accurate and up-to-date.",
        "You will adhere to MAP (Minimum Advertised Pricing) policies set by our company.",
        "You understand wholesale accounts are for resale purposes only.",
    ],
};

impl RegistrationRecord for WholesaleRecord {
    type Field = WholesaleField;
    type Edit = WholesaleEdit;

    const VARIANT: FormVariant = FormVariant::Wholesale;
    const SIGNATURE_FIELD: WholesaleField = WholesaleField::Signature;

    fn schema() -> &'static [FieldSpec<WholesaleField>] {
        &SCHEMA
    }

    fn copy() -> &'static FormCopy {
        &COPY
    }

    fn value(&self, field: WholesaleField) -> FieldValue<'_> {
        self.view(field)
    }

    fn apply(&mut self, edit: WholesaleEdit) -> WholesaleField {
        self.write(edit)
    }

    fn set_signature(&mut self, artifact: Option<SignatureArtifact>) {
        self.signature = artifact;
    }

    fn parse_answer(field: WholesaleField, answer: &Answer) -> Result<WholesaleEdit> {
        Self::parse(field, answer)
    }
}
