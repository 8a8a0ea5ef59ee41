use super::*;
use bizscout_core::BusinessRecord;

fn sample_records() -> Vec<BusinessRecord> {
    vec![
        BusinessRecord::from_provider(
            "a",
            Some("Alpha".to_string()),
            "Bakery",
            Some("1 Alpha Rd".to_string()),
            None,
            None,
        ),
        BusinessRecord::from_provider(
            "b",
            Some("Beta".to_string()),
            "Bakery",
            Some("2 Beta Rd".to_string()),
            Some("(512) 555-0100".to_string()),
            Some("https://beta.example".to_string()),
        ),
    ]
}

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from([
        "bizscout-cli",
        "search",
        "--location",
        "Austin, TX",
        "--category",
        "Bakery",
    ])
    .expect("expected valid cli args");

    let Commands::Search {
        location,
        category,
        limit,
        format,
        output,
    } = cli.command;
    assert_eq!(location, "Austin, TX");
    assert_eq!(category, "Bakery");
    assert_eq!(limit, 10);
    assert_eq!(format, OutputFormat::Json);
    assert!(output.is_none());
}

#[test]
fn parses_csv_format_and_output_path() {
    let cli = Cli::try_parse_from([
        "bizscout-cli",
        "search",
        "--location",
        "Austin",
        "--category",
        "Florist",
        "--limit",
        "25",
        "--format",
        "csv",
        "--output",
        "out.csv",
    ])
    .expect("expected valid cli args");

    let Commands::Search {
        limit,
        format,
        output,
        ..
    } = cli.command;
    assert_eq!(limit, 25);
    assert_eq!(format, OutputFormat::Csv);
    assert_eq!(output, Some(std::path::PathBuf::from("out.csv")));
}

#[test]
fn search_requires_location() {
    let result = Cli::try_parse_from(["bizscout-cli", "search", "--category", "Bakery"]);
    assert!(result.is_err());
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from([
        "bizscout-cli",
        "search",
        "--location",
        "Austin",
        "--category",
        "Bakery",
        "--format",
        "xml",
    ]);
    assert!(result.is_err());
}

#[test]
fn csv_output_lists_website_rows_first() {
    let mut buf = Vec::new();
    search::write_output(&mut buf, OutputFormat::Csv, &sample_records()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Business Name,Category,Phone"));
    assert!(lines[1].starts_with("Beta,Bakery,(512) 555-0100,2 Beta Rd,https://beta.example,Has Website"));
    assert!(lines[2].starts_with("Alpha,Bakery,N/A,1 Alpha Rd,,No Website"));
}

#[test]
fn json_output_is_a_camel_case_array() {
    let mut buf = Vec::new();
    search::write_output(&mut buf, OutputFormat::Json, &sample_records()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "a");
    assert!(items[0]["website"].is_null());
    assert_eq!(items[1]["verificationNotes"], "Fetched from Google Places API");
}
