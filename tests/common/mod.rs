#![allow(dead_code)]

use std::fs;

use phone8ez::args::Args;
use phone8ez::dataset::args::WorkspaceArgs;
use phone8ez::dataset::{DataSet, DataSetData};
use phone8ez::output::args::OutputArgs;
use phone8ez::sheet::Sheet;
use phone8ez::subsidy::args::SubsidyArgs;

pub const SUBSIDY_JSON: &str = r#"{
  "manufacturers": {
    "삼성": {
      "models": [
        {
          "model_number": "SM-S928N",
          "model_name": "갤럭시 S24 울트라",
          "support_info": { "sections": [
            { "carriers": {
              "SK": { "plan_name": "5GX 프라임", "monthly_fee": 89000, "device_support": 450000, "number_port_support": 500000 }
            } }
          ] }
        }
      ]
    }
  },
  "carrier_monthly_fees": { "SK": [89000, 69000] }
}"#;

pub const WORKSPACE_TOML: &str = r#"
[sk_a]
type = "normal"
name = "SK 정책 A"
rows = [
  ["", "SK", "SK"],
  ["", "공시", "공시"],
  ["", "5GX 프라임", "5GX 프라임"],
  ["", "번호이동", "기기변경"],
  ["", "대리점A", "대리점A"],
  ["SM-S928N", "40", "20"],
  ["SM-F956N", "55", "30"],
]

[sk_b]
type = "normal"
name = "SK 정책 B"
rows = [
  ["", "SK"],
  ["", "공시"],
  ["", "5GX 프라임"],
  ["", "번호이동"],
  ["", "대리점A"],
  ["SM-F956N", "60"],
]

[dashboard]
type = "integrated"
name = "통합"
rows = [
  ["", "SK", "SK"],
  ["", "공시", "공시"],
  ["", "5GX 프라임|89000|69000", "5GX 프라임|89000|69000"],
  ["", "번호이동", "기기변경"],
  ["", "대리점A", "대리점A"],
  ["codes:SM-S928N,SM-S928N0|standard:SM-S928N|price:1350000", "", ""],
  ["codes:SM-F956N|standard:SM-F956N|price:2200000", "", "manual"],
]

[extras]
type = "additional"
services = { "대리점A-SK" = [{ service = "부가서비스", discount = 30000 }] }
"#;

pub fn ensure_out_dir() {
    fs::create_dir_all("out").unwrap();
}

pub fn write_fixture(file_name: &str, contents: &str) -> String {
    ensure_out_dir();
    let path = format!("out/{}", file_name);
    fs::write(&path, contents).expect("write fixture file");
    path
}

pub fn build_args(workspace: &str, subsidy: Option<&str>, prefix: &str) -> Args {
    Args {
        workspace: WorkspaceArgs {
            workspace: workspace.to_string(),
            xlsx: None,
            integrated: None,
            overwrite: false,
        },
        subsidy: SubsidyArgs {
            subsidy: subsidy.map(str::to_string),
        },
        output: OutputArgs {
            out: "out".to_string(),
            prefix: prefix.to_string(),
            suffix: "TEST".to_string(),
            no_report: false,
            detailed: false,
            quiet: true,
            verbose: false,
        },
    }
}

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn sheet(rows: &[&[&str]]) -> Sheet {
    Sheet::from_rows(rows.iter().map(|r| row(r)).collect()).expect("rectangular fixture")
}

pub fn policy(id: &str, rows: &[&[&str]]) -> DataSet {
    DataSet {
        id: id.to_string(),
        name: id.to_string(),
        created_at: None,
        data: DataSetData::Normal(sheet(rows)),
    }
}
