//! Spreadsheet header → schema column mapping.

use crate::models::AssetColumn;

/// Collapse whitespace runs (including the line breaks spreadsheet headers
/// like "Form\nFactor" carry) and lowercase.
pub(crate) fn normalize_header(h: &str) -> String {
    h.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn lookup(name: &str) -> Option<AssetColumn> {
    let col = match name {
        "up?" => AssetColumn::Status,
        "rank" => AssetColumn::Rank,
        "net name" => AssetColumn::NetName,
        "form factor" => AssetColumn::FormFactor,
        "vendor" => AssetColumn::Vendor,
        "model" => AssetColumn::Model,
        "screen 1" => AssetColumn::Screen1,
        "h px" => AssetColumn::HPx1,
        "v px" => AssetColumn::VPx1,
        "screen 2" => AssetColumn::Screen2,
        "h px.1" => AssetColumn::HPx2,
        "v px.1" => AssetColumn::VPx2,
        "cpu" => AssetColumn::Cpu,
        "cores x threads" => AssetColumn::CoresThreads,
        "ram" => AssetColumn::Ram,
        "disk1" => AssetColumn::Disk1,
        "disk2" => AssetColumn::Disk2,
        "disk3" => AssetColumn::Disk3,
        "disk4" => AssetColumn::Disk4,
        "ext dsk 1" => AssetColumn::ExtDisk,
        "location" => AssetColumn::Location,
        "room" => AssetColumn::Room,
        "os" => AssetColumn::Os,
        "release" => AssetColumn::OsRelease,
        "oclp" => AssetColumn::Oclp,
        other => return AssetColumn::from_db_str(other),
    };
    Some(col)
}

/// Map every header cell to the schema column it feeds, if any.
///
/// The sheet repeats "H PX" / "V PX" for the second screen; the second
/// occurrence is routed to `h_px2` / `v_px2`. A column already claimed by an
/// earlier header is not claimed again.
pub fn map_headers(headers: &[String]) -> Vec<Option<AssetColumn>> {
    let mut seen = [false; AssetColumn::COUNT];
    let mut out = Vec::with_capacity(headers.len());

    for h in headers {
        let mut col = lookup(&normalize_header(h));

        col = match col {
            Some(AssetColumn::HPx1) if seen[AssetColumn::HPx1.index()] => Some(AssetColumn::HPx2),
            Some(AssetColumn::VPx1) if seen[AssetColumn::VPx1.index()] => Some(AssetColumn::VPx2),
            other => other,
        };

        if let Some(c) = col {
            if seen[c.index()] {
                col = None;
            } else {
                seen[c.index()] = true;
            }
        }

        out.push(col);
    }

    out
}
