//! Integration tests for lapis-core, wired to the in-memory adapters.

use std::path::{Path, PathBuf};

use lapis_adapters::{MemoryFilesystem, ScriptedPrompter};
use lapis_core::{
    domain::{DescriptorDocument, SOURCE_STUB_FILE},
    prelude::*,
};

fn service_over(fs: &MemoryFilesystem) -> EndpointService {
    EndpointService::new(Box::new(fs.clone()))
}

#[test]
fn collect_render_write_orders() {
    let prompter = ScriptedPrompter::new([
        "orders",
        "2.0.0",
        "Order lookup",
        "retail, internal",
        "POST",
        "y",
        "30",
    ]);

    let metadata = MetadataCollector::new(&prompter, CollectorDefaults::default())
        .collect()
        .unwrap();
    assert_eq!(prompter.remaining(), 0);

    let fs = MemoryFilesystem::new();
    let report = service_over(&fs).scaffold(&metadata, APIS_DIR).unwrap();

    assert_eq!(report.endpoint_dir, Path::new("src/apis/orders"));
    assert_eq!(
        fs.list_files(),
        [
            PathBuf::from("src/apis/orders/config.json"),
            PathBuf::from("src/apis/orders/index.ts"),
        ]
    );

    let descriptor: DescriptorDocument = serde_json::from_str(
        &fs.read_file(Path::new("src/apis/orders/config.json"))
            .unwrap(),
    )
    .unwrap();
    assert!(descriptor.enabled);
    assert_eq!(descriptor.metadata.name, "orders");
    assert_eq!(descriptor.metadata.version, "2.0.0");
    assert_eq!(descriptor.metadata.description, "Order lookup");
    assert_eq!(descriptor.metadata.tags, ["retail", "internal"]);

    let stub = fs
        .read_file(&Path::new("src/apis/orders").join(SOURCE_STUB_FILE))
        .unwrap();
    assert!(stub.contains("path: '/api/orders'"));
    assert!(stub.contains("method: 'POST'"));
    assert!(stub.contains("enabled: true"));
    assert!(stub.contains("ttlSeconds: 30"));
    assert!(stub.contains("export = ordersAPI;"));
}

#[test]
fn rejected_name_is_reported_then_reasked() {
    let prompter = ScriptedPrompter::new(["9lives", "cats", "", "", "", "", "", ""]);

    let metadata = MetadataCollector::new(&prompter, CollectorDefaults::default())
        .collect()
        .unwrap();

    assert_eq!(metadata.name, "cats");
    assert_eq!(prompter.reports().len(), 1);
    assert!(prompter.reports()[0].contains("9lives"));
}

#[test]
fn second_scaffold_overwrites_and_reports_existing_dir() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    let first = EndpointMetadata::builder()
        .name("weather")
        .description("first")
        .build()
        .unwrap();
    let second = EndpointMetadata::builder()
        .name("weather")
        .description("second")
        .build()
        .unwrap();

    assert!(!service.scaffold(&first, APIS_DIR).unwrap().dir_existed);
    assert!(service.scaffold(&second, APIS_DIR).unwrap().dir_existed);

    assert_eq!(fs.list_files().len(), 2);
    assert!(
        fs.read_file(Path::new("src/apis/weather/config.json"))
            .unwrap()
            .contains("second")
    );
}

#[test]
fn failed_stub_write_keeps_descriptor() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("src/apis/ping/index.ts");

    let metadata = EndpointMetadata::builder().name("ping").build().unwrap();
    let err = service_over(&fs).scaffold(&metadata, APIS_DIR).unwrap_err();

    assert!(err.to_string().contains("src/apis/ping/index.ts"));
    assert_eq!(fs.list_files(), [PathBuf::from("src/apis/ping/config.json")]);
}

#[test]
fn engine_is_usable_without_services() {
    let metadata = EndpointMetadata::builder()
        .name("weather")
        .cache(true, 120)
        .build()
        .unwrap();

    assert_eq!(TypeIdentifier::derive(&metadata.name).as_str(), "Weather");
    assert_eq!(render_descriptor(&metadata).metadata.name, "weather");
    let stub = render_source_stub(&metadata);
    assert!(stub.as_str().contains("enabled: true"));
    assert!(stub.as_str().contains("ttlSeconds: 120"));
}
