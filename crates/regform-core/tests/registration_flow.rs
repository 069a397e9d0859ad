//! End-to-end registration flows with paused time

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use regform_core::domain::value_objects::{MarketingSupport, WholesaleBusinessType};
use regform_core::infrastructure::{InMemoryEventPublisher, InMemorySink, RecordingNotifier};
use regform_core::{
    Answer, DistributorField, DistributorRecord, FieldStore, FormPorts, NotificationKind, Point,
    RegformConfig, SharedStore, SignatureInput, SignaturePad, SubmissionController,
    SubmissionState, Violation, WholesaleEdit, WholesaleField, WholesaleRecord,
};

struct Form<R: regform_core::RegistrationRecord> {
    controller: SubmissionController<R>,
    pad: SignaturePad,
    notifier: Arc<RecordingNotifier>,
    sink: Arc<InMemorySink<R>>,
}

fn form<R: regform_core::RegistrationRecord>(store: FieldStore<R>) -> Form<R> {
    let config = RegformConfig::default();
    let store = SharedStore::new(store);
    let notifier = Arc::new(RecordingNotifier::new());
    let sink = Arc::new(InMemorySink::new());
    let ports = FormPorts::new(notifier.clone(), sink.clone())
        .with_events(Arc::new(InMemoryEventPublisher::new()));
    let pad = SignaturePad::new(Arc::new(store.clone()), notifier.clone(), &config);
    let controller = SubmissionController::new(store, ports, &config).unwrap();
    Form {
        controller,
        pad,
        notifier,
        sink,
    }
}

fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, Answer> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), Answer::from(*value)))
        .collect()
}

fn wholesale_answers(company: &str) -> BTreeMap<String, Answer> {
    let mut map = answers(&[
        ("companyName", company),
        ("contactPersonFirstName", "Ada"),
        ("contactPersonLastName", "Lovelace"),
        ("titlePosition", "Purchasing Lead"),
        ("street", "12 Market Street"),
        ("city", "Springfield"),
        ("state", "IL"),
        ("zipCode", "62701"),
        ("phoneNumber", "+15551234567"),
        ("emailAddress", "ada@acme.example"),
        ("businessType", "Health Practitioner"),
        ("yearsInBusiness", "7"),
        ("monthlyPurchaseVolume", "$5,000 - $10,000"),
        ("federalEIN", "12-3456789"),
        ("resaleCertificateNumber", "IL-RC-0042"),
        ("sellsSupplements", "Yes"),
        ("complyWithLaws", "Yes"),
        ("sellsOnThirdParty", "No"),
        ("preferredPaymentMethod", "ACH / Bank Transfer"),
        ("preferredShippingMethod", "USPS"),
        ("hasLoadingDock", "No"),
        ("autoShipEnrollment", "Yes, sign me up for Auto-Ship."),
    ]);
    map.insert("agreementConfirmed".into(), Answer::Flag(true));
    map
}

fn sign(pad: &SignaturePad) {
    pad.draw(&[
        Point::new(30.0, 150.0),
        Point::new(90.0, 60.0),
        Point::new(160.0, 140.0),
        Point::new(240.0, 70.0),
    ])
    .unwrap();
    pad.save().unwrap();
}

#[tokio::test(start_paused = true)]
async fn wholesale_valid_submission_reaches_sink() {
    let company = "Acme Health & Wellness, Inc. – Zürich";
    let form = form(FieldStore::<WholesaleRecord>::from_answers(&wholesale_answers(company)).unwrap());
    sign(&form.pad);

    form.controller.submit();
    assert_eq!(form.controller.state(), SubmissionState::Pending);

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert_eq!(form.controller.state(), SubmissionState::Pending);

    assert_eq!(form.controller.wait_settled().await, SubmissionState::Succeeded);

    let submissions = form.sink.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].record.company_name.as_bytes(), company.as_bytes());
    assert!(submissions[0].record.signature.is_some());

    let success = form.notifier.of_kind(NotificationKind::Success);
    let last = success.last().unwrap();
    assert!(last.message.starts_with("Registration application submitted successfully!"));
    assert_eq!(last.duration, Some(Duration::from_secs(5)));
    assert!(form.controller.store().read(|s| s.errors().is_empty()));
}

#[tokio::test(start_paused = true)]
async fn wholesale_unconfirmed_agreement_fails_with_single_violation() {
    let mut map = wholesale_answers("Acme");
    map.insert("agreementConfirmed".into(), Answer::Flag(false));
    let form = form(FieldStore::<WholesaleRecord>::from_answers(&map).unwrap());
    sign(&form.pad);

    form.controller.submit();
    assert_eq!(form.controller.wait_settled().await, SubmissionState::Failed);

    let errors = form.controller.store().read(|s| s.errors().clone());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(&WholesaleField::AgreementConfirmed),
        Some(&Violation::AgreementNotConfirmed)
    );
    assert_eq!(form.notifier.of_kind(NotificationKind::Error).len(), 1);
    assert!(form.sink.is_empty());
}

#[tokio::test(start_paused = true)]
async fn signature_auto_clear_keeps_form_signature() {
    let form = form(FieldStore::<WholesaleRecord>::from_answers(&wholesale_answers("Acme")).unwrap());
    sign(&form.pad);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert!(!form.pad.has_content());

    form.controller.submit();
    assert_eq!(form.controller.wait_settled().await, SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn missing_signature_blocks_submission() {
    let form = form(FieldStore::<WholesaleRecord>::from_answers(&wholesale_answers("Acme")).unwrap());
    assert!(form.pad.save().is_err());

    form.controller.submit();
    assert_eq!(form.controller.wait_settled().await, SubmissionState::Failed);
    assert_eq!(
        form.controller.store().read(|s| s.error(WholesaleField::Signature)),
        Some(Violation::MissingRequired)
    );
}

#[tokio::test(start_paused = true)]
async fn editing_after_failure_clears_field_error() {
    let mut map = wholesale_answers("Acme");
    map.insert("emailAddress".into(), Answer::from(""));
    let form = form(FieldStore::<WholesaleRecord>::from_answers(&map).unwrap());
    sign(&form.pad);

    form.controller.submit();
    form.controller.wait_settled().await;
    assert_eq!(
        form.controller.store().read(|s| s.error(WholesaleField::EmailAddress)),
        Some(Violation::MissingRequired)
    );

    form.controller
        .store()
        .apply_edit(WholesaleEdit::EmailAddress("ada@acme.example".into()));
    form.controller
        .store()
        .apply_edit(WholesaleEdit::BusinessType(Some(WholesaleBusinessType::Other)));
    assert!(form.controller.store().read(|s| s.errors().is_empty()));

    form.controller.submit();
    assert_eq!(form.controller.wait_settled().await, SubmissionState::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn distributor_submission_with_marketing_support() {
    let mut map = answers(&[
        ("companyName", "Northwind Distribution"),
        ("contactPersonFirstName", "Grace"),
        ("contactPersonLastName", "Hopper"),
        ("titlePosition", "Director"),
        ("street", "400 Harbor Way"),
        ("city", "Oakland"),
        ("state", "CA"),
        ("zipCode", "94607"),
        ("phoneNumber", "(510) 555-0199"),
        ("emailAddress", "grace@northwind.example"),
        ("businessType", "Sub-Distributor"),
        ("yearsInBusiness", "12"),
        ("numberOfEmployees", "40"),
        ("distributionTerritory", "West Coast"),
        ("monthlyAnnualVolume", "$250,000 / year"),
        ("retailAccountsServed", "85"),
        ("warehousingFacilities", "Yes"),
        ("coldStorageAvailable", "No"),
        ("federalEIN", "98-7654321"),
        ("resaleCertificateNumber", "CA-SR-9981"),
        ("fdaFtcCompliance", "Yes"),
        ("productLiabilityInsurance", "Yes"),
        ("insuranceCertificateFile", "C:\\docs\\insurance.pdf"),
        ("mapGuidelines", "Yes"),
        ("onlineMarketplaces", "No"),
        ("salesTeam", "Yes"),
        ("preferredPaymentMethod", "Credit Card"),
        ("preferredShippingMethod", "Freight"),
        ("dropShippingSupport", "No"),
    ]);
    map.insert("agreementConfirmed".into(), Answer::Flag(true));
    map.insert(
        "marketingSupportNeeded".into(),
        Answer::List(vec!["Product Samples".into()]),
    );

    let mut store = FieldStore::<DistributorRecord>::from_answers(&map).unwrap();
    store.toggle_option(MarketingSupport::JointAdvertising, true);
    assert!(store.is_revealed(DistributorField::InsuranceCertificateFile));
    assert!(!store.is_revealed(DistributorField::MarketplacePlatforms));

    let form = form(store);
    sign(&form.pad);
    form.controller.submit();
    assert_eq!(form.controller.wait_settled().await, SubmissionState::Succeeded);

    let record = &form.sink.submissions()[0].record;
    assert_eq!(record.marketing_support_needed.len(), 2);
    assert_eq!(
        record.insurance_certificate_file.as_ref().map(|f| f.file_name()),
        Some("insurance.pdf")
    );

    let last = form.notifier.of_kind(NotificationKind::Success).pop().unwrap();
    assert!(last.message.starts_with("Distributor registration application submitted successfully!"));
    assert_eq!(last.duration, Some(Duration::from_secs(6)));
}
