#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rinv() -> Command {
    cargo_bin_cmd!("rinventory")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinventory.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small sheet in the layout of the inventory workbook, saved as CSV.
pub const SAMPLE_SHEET: &str = "\
Up?,Rank,Net Name,Form Factor,Vendor,Model,Screen 1,H PX,V PX,Screen 2,H PX,V PX,CPU,Cores x Threads,RAM,Disk1,Disk2,Disk3,Disk4,Ext Dsk 1,Location,Room,OS,Release,OCLP
spare,2,laptop7,laptop,Apple,MBP 2015,15,2880.0,1800,27,2560,1440,i7-4870HQ,4/8,16GB,512GB,,,,2TB,shelf,office,macOS,14,yes
up,1.0,srv1,tower,Dell,T140,24,1920,1080,,,,Xeon E-2224,4/4,32GB,1TB,,,,,rack,lab,Debian,12,
,,,,,,,,,,,,,,,,,,,,,,,,
Notes,,,,,,,,,,,,,,,,,,,,,,,,
,,2024-03-01,,,,,,,,,,,,,,,,,,,,,,
,,srv1,replaced PSU,,,,,,,,,,,,,,,,,,,,,
,,laptop7,battery swap,,,,,,,,,,,,,,,,,,,,,
,,2024-05-10,,,,,,,,,,,,,,,,,,,,,,
,,srv1,upgraded to Debian 12,,,,,,,,,,,,,,,,,,,,,
";

/// Write [`SAMPLE_SHEET`] next to the test DB and return its path.
pub fn write_sample_sheet(name: &str) -> String {
    let p = temp_out(name, "csv");
    fs::write(&p, SAMPLE_SHEET).expect("write sample sheet");
    p
}

/// Initialize DB and import the sample sheet through the CLI
pub fn init_db_with_data(db_path: &str, name: &str) {
    rinv()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let sheet = write_sample_sheet(name);
    rinv()
        .args(["--db", db_path, "import", "--file", &sheet])
        .assert()
        .success();
}
