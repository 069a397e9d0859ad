//! Distributor registration record

use std::collections::BTreeSet;

use super::sections::*;
use crate::domain::schema::{
    FieldKind, FieldRule, FieldSpec, FieldValue, FormCopy, FormVariant, RegistrationRecord,
};
use crate::domain::value_objects::{
    Answer, DistributorBusinessType, DistributorShipping, FileRef, MarketingSupport,
    PaymentMethod, SignatureArtifact, YesNo,
};
use crate::error::Result;

const SALES_CAPACITY: &str = "Sales & Capacity";
const COMPLIANCE: &str = "Compliance & Certifications";
const MARKETING: &str = "Marketing & Promotion";

registration_record! {
    /// Distributor application
    DistributorRecord, DistributorField, DistributorEdit {
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
        business_type: Option<DistributorBusinessType>, choice => BusinessType = "businessType";
        other_business_type: String, text => OtherBusinessType = "otherBusinessType";
        years_in_business: String, text => YearsInBusiness = "yearsInBusiness";
        number_of_employees: String, text => NumberOfEmployees = "numberOfEmployees";
        distribution_territory: String, text => DistributionTerritory = "distributionTerritory";
        existing_brands: String, text => ExistingBrands = "existingBrands";
        monthly_annual_volume: String, text => MonthlyAnnualVolume = "monthlyAnnualVolume";
        retail_accounts_served: String, text => RetailAccountsServed = "retailAccountsServed";
        warehousing_facilities: Option<YesNo>, choice => WarehousingFacilities = "warehousingFacilities";
        cold_storage_available: Option<YesNo>, choice => ColdStorageAvailable = "coldStorageAvailable";
        #[serde(rename = "federalEIN")]
        federal_ein: String, text => FederalEin = "federalEIN";
        resale_certificate_number: String, text => ResaleCertificateNumber = "resaleCertificateNumber";
        business_license_file: Option<FileRef>, file => BusinessLicenseFile = "businessLicenseFile";
        fda_ftc_compliance: Option<YesNo>, choice => FdaFtcCompliance = "fdaFtcCompliance";
        product_liability_insurance: Option<YesNo>, choice => ProductLiabilityInsurance = "productLiabilityInsurance";
        insurance_certificate_file: Option<FileRef>, file => InsuranceCertificateFile = "insuranceCertificateFile";
        map_guidelines: Option<YesNo>, choice => MapGuidelines = "mapGuidelines";
        online_marketplaces: Option<YesNo>, choice => OnlineMarketplaces = "onlineMarketplaces";
        marketplace_platforms: String, text => MarketplacePlatforms = "marketplacePlatforms";
        sales_team: Option<YesNo>, choice => SalesTeam = "salesTeam";
        annual_marketing_spend: String, text => AnnualMarketingSpend = "annualMarketingSpend";
        marketing_support_needed: BTreeSet<MarketingSupport>, choices => MarketingSupportNeeded = "marketingSupportNeeded";
        preferred_payment_method: Option<PaymentMethod>, choice => PreferredPaymentMethod = "preferredPaymentMethod";
        other_payment_method: String, text => OtherPaymentMethod = "otherPaymentMethod";
        preferred_shipping_method: Option<DistributorShipping>, choice => PreferredShippingMethod = "preferredShippingMethod";
        other_shipping_method: String, text => OtherShippingMethod = "otherShippingMethod";
        drop_shipping_support: Option<YesNo>, choice => DropShippingSupport = "dropShippingSupport";
        agreement_confirmed: bool, flag => AgreementConfirmed = "agreementConfirmed";
        signature: Option<SignatureArtifact>, signature => Signature = "signature";
        signature_date: String, date => SignatureDate = "signatureDate";
    }
}

use DistributorField as F;

const YES_NO: FieldKind = FieldKind::SingleSelect(YesNo::LABELS);

static SCHEMA: [FieldSpec<DistributorField>; 41] = [
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
    FieldSpec::new(F::Website, CONTACT, "Website", FieldKind::Text),
    FieldSpec::new(
        F::BusinessType,
        BUSINESS,
        "Type of Business",
        FieldKind::SingleSelect(DistributorBusinessType::LABELS),
    )
    .required(),
    FieldSpec::new(F::OtherBusinessType, BUSINESS, "Please specify", FieldKind::Text)
        .revealed_by(F::BusinessType, "Other"),
    FieldSpec::new(F::YearsInBusiness, BUSINESS, "Years in Business", FieldKind::Text).required(),
    FieldSpec::new(F::NumberOfEmployees, BUSINESS, "Number of Employees", FieldKind::Text).required(),
    FieldSpec::new(
        F::DistributionTerritory,
        BUSINESS,
        "Distribution Territory (Regions/States/Countries)",
        FieldKind::Text,
    )
    .required(),
    FieldSpec::new(F::ExistingBrands, BUSINESS, "Existing Brands Distributed", FieldKind::Text),
    FieldSpec::new(
        F::MonthlyAnnualVolume,
        SALES_CAPACITY,
        "Estimated Monthly/Annual Purchase Volume",
        FieldKind::Text,
    )
    .required(),
    FieldSpec::new(
        F::RetailAccountsServed,
        SALES_CAPACITY,
        "Current Number of Retail Accounts Served",
        FieldKind::Text,
    )
    .required(),
    FieldSpec::new(F::WarehousingFacilities, SALES_CAPACITY, "Warehousing Facilities Available", YES_NO)
        .required(),
    FieldSpec::new(
        F::ColdStorageAvailable,
        SALES_CAPACITY,
        "Cold Storage Available (if required)",
        YES_NO,
    )
    .required(),
    FieldSpec::new(F::FederalEin, LEGAL, "Federal EIN / Tax ID Number", FieldKind::Text).required(),
    FieldSpec::new(
        F::ResaleCertificateNumber,
        LEGAL,
        "State Resale/Tax Exemption Certificate Number",
        FieldKind::Text,
    )
    .required(),
    FieldSpec::new(
        F::BusinessLicenseFile,
        LEGAL,
        "Upload Business License / Resale Certificate",
        FieldKind::File,
    ),
    FieldSpec::new(
        F::FdaFtcCompliance,
        COMPLIANCE,
        "Do you comply with FDA/FTC regulations for dietary supplements?",
        YES_NO,
    )
    .required(),
    FieldSpec::new(
        F::ProductLiabilityInsurance,
        COMPLIANCE,
        "Do you carry product liability insurance?",
        YES_NO,
    )
    .required(),
    FieldSpec::new(F::InsuranceCertificateFile, COMPLIANCE, "Upload Insurance Certificate", FieldKind::File)
        .revealed_by(F::ProductLiabilityInsurance, "Yes"),
    FieldSpec::new(
        F::MapGuidelines,
        COMPLIANCE,
        "Do you agree to follow MAP (Minimum Advertised Pricing) guidelines?",
        YES_NO,
    )
    .required(),
    FieldSpec::new(
        F::OnlineMarketplaces,
        COMPLIANCE,
        "Do you plan to sell products on online marketplaces (Amazon, eBay, Walmart, etc.)?",
        YES_NO,
    )
    .required(),
    FieldSpec::new(F::MarketplacePlatforms, COMPLIANCE, "Please specify platforms", FieldKind::Text)
        .revealed_by(F::OnlineMarketplaces, "Yes"),
    FieldSpec::new(F::SalesTeam, MARKETING, "Do you have a sales team to promote products?", YES_NO)
        .required(),
    FieldSpec::new(
        F::AnnualMarketingSpend,
        MARKETING,
        "Expected Annual Marketing Spend for Our Products",
        FieldKind::Text,
    ),
    FieldSpec::new(
        F::MarketingSupportNeeded,
        MARKETING,
        "Preferred Marketing Support Needed",
        FieldKind::MultiSelect(MarketingSupport::LABELS),
    ),
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
        FieldKind::SingleSelect(DistributorShipping::LABELS),
    )
    .required(),
    FieldSpec::new(F::OtherShippingMethod, PAYMENT_SHIPPING, "Please specify shipping method", FieldKind::Text)
        .revealed_by(F::PreferredShippingMethod, "Other"),
    FieldSpec::new(
        F::DropShippingSupport,
        PAYMENT_SHIPPING,
        "Do you require drop-shipping support?",
        YES_NO,
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
    title: "Distributor Registration Form",
    subtitle: "Please fill out all required information to register as a distributor",
    submitting: "Submitting your distributor application...",
    success: "Distributor registration application submitted successfully! Our team will review your application and contact you within 3-5 business days to discuss the next steps.",
    success_duration_ms: 6000,
    failure: "Please fill in all required fields correctly before submitting your distributor application.",
    agreement_clauses: &[
        "All information provided is true and accurate.",
        "You will act as an authorized distributor of our products within agreed territories.",
        "You agree to comply with U.S. laws, FDA/FTC guidelines, and our distribution policies.",
        "Distributor approval is subject to review and may require a separate Distribution Agreement Contract.",
    ],
};

impl RegistrationRecord for DistributorRecord {
    type Field = DistributorField;
    type Edit = DistributorEdit;

    const VARIANT: FormVariant = FormVariant::Distributor;
    const SIGNATURE_FIELD: DistributorField = DistributorField::Signature;

    fn schema() -> &'static [FieldSpec<DistributorField>] {
        &SCHEMA
    }

    fn copy() -> &'static FormCopy {
        &COPY
    }

    fn value(&self, field: DistributorField) -> FieldValue<'_> {
        self.view(field)
    }

    fn apply(&mut self, edit: DistributorEdit) -> DistributorField {
        self.write(edit)
    }

    fn set_signature(&mut self, artifact: Option<SignatureArtifact>) {
        self.signature = artifact;
    }

    fn parse_answer(field: DistributorField, answer: &Answer) -> Result<DistributorEdit> {
        Self::parse(field, answer)
    }
}

impl DistributorRecord {
    /// Add or remove one marketing support option; the set never holds duplicates
    pub fn toggle_marketing_support(&mut self, option: MarketingSupport, checked: bool) {
        if checked {
            self.marketing_support_needed.insert(option);
        } else {
            self.marketing_support_needed.remove(&option);
        }
    }
}
