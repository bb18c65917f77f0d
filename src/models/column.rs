use crate::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// The closed set of editable asset columns.
///
/// This is the only path by which a column identifier reaches SQL: callers
/// parse user input into an `AssetColumn` and the statement fragment is
/// produced by [`AssetColumn::to_db_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetColumn {
    Status,
    Rank,
    NetName,
    FormFactor,
    Vendor,
    Model,
    Screen1,
    HPx1,
    VPx1,
    Screen2,
    HPx2,
    VPx2,
    Cpu,
    CoresThreads,
    Ram,
    Disk1,
    Disk2,
    Disk3,
    Disk4,
    ExtDisk,
    Location,
    Room,
    Os,
    OsRelease,
    Oclp,
}

impl AssetColumn {
    pub const COUNT: usize = 25;

    /// Canonical column order (table view, exports, INSERT statements).
    pub const ALL: [AssetColumn; Self::COUNT] = [
        AssetColumn::Status,
        AssetColumn::Rank,
        AssetColumn::NetName,
        AssetColumn::FormFactor,
        AssetColumn::Vendor,
        AssetColumn::Model,
        AssetColumn::Screen1,
        AssetColumn::HPx1,
        AssetColumn::VPx1,
        AssetColumn::Screen2,
        AssetColumn::HPx2,
        AssetColumn::VPx2,
        AssetColumn::Cpu,
        AssetColumn::CoresThreads,
        AssetColumn::Ram,
        AssetColumn::Disk1,
        AssetColumn::Disk2,
        AssetColumn::Disk3,
        AssetColumn::Disk4,
        AssetColumn::ExtDisk,
        AssetColumn::Location,
        AssetColumn::Room,
        AssetColumn::Os,
        AssetColumn::OsRelease,
        AssetColumn::Oclp,
    ];

    /// Position inside [`AssetColumn::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert enum → DB column name
    pub fn to_db_str(self) -> &'static str {
        match self {
            AssetColumn::Status => "status",
            AssetColumn::Rank => "rank",
            AssetColumn::NetName => "net_name",
            AssetColumn::FormFactor => "form_factor",
            AssetColumn::Vendor => "vendor",
            AssetColumn::Model => "model",
            AssetColumn::Screen1 => "screen1",
            AssetColumn::HPx1 => "h_px1",
            AssetColumn::VPx1 => "v_px1",
            AssetColumn::Screen2 => "screen2",
            AssetColumn::HPx2 => "h_px2",
            AssetColumn::VPx2 => "v_px2",
            AssetColumn::Cpu => "cpu",
            AssetColumn::CoresThreads => "cores_threads",
            AssetColumn::Ram => "ram",
            AssetColumn::Disk1 => "disk1",
            AssetColumn::Disk2 => "disk2",
            AssetColumn::Disk3 => "disk3",
            AssetColumn::Disk4 => "disk4",
            AssetColumn::ExtDisk => "ext_disk",
            AssetColumn::Location => "location",
            AssetColumn::Room => "room",
            AssetColumn::Os => "os",
            AssetColumn::OsRelease => "os_release",
            AssetColumn::Oclp => "oclp",
        }
    }

    /// Convert DB column name → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_db_str() == s)
    }

    /// Human readable header used by the views and exports.
    pub fn label(self) -> &'static str {
        match self {
            AssetColumn::Status => "Status",
            AssetColumn::Rank => "Rank",
            AssetColumn::NetName => "Net Name",
            AssetColumn::FormFactor => "Form Factor",
            AssetColumn::Vendor => "Vendor",
            AssetColumn::Model => "Model",
            AssetColumn::Screen1 => "Screen 1",
            AssetColumn::HPx1 | AssetColumn::HPx2 => "H PX",
            AssetColumn::VPx1 | AssetColumn::VPx2 => "V PX",
            AssetColumn::Screen2 => "Screen 2",
            AssetColumn::Cpu => "CPU",
            AssetColumn::CoresThreads => "Cores x Threads",
            AssetColumn::Ram => "RAM",
            AssetColumn::Disk1 => "DISK1",
            AssetColumn::Disk2 => "DISK2",
            AssetColumn::Disk3 => "DISK3",
            AssetColumn::Disk4 => "DISK4",
            AssetColumn::ExtDisk => "EXT DSK 1",
            AssetColumn::Location => "Location",
            AssetColumn::Room => "Room",
            AssetColumn::Os => "OS",
            AssetColumn::OsRelease => "Release",
            AssetColumn::Oclp => "OCLP",
        }
    }

    /// Columns holding numbers (right-aligned in the views).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AssetColumn::Rank
                | AssetColumn::HPx1
                | AssetColumn::VPx1
                | AssetColumn::HPx2
                | AssetColumn::VPx2
        )
    }
}

impl FromStr for AssetColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_db_str(s).ok_or_else(|| AppError::InvalidColumn(s.to_string()))
    }
}

impl fmt::Display for AssetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_has_25_unique_names() {
        let mut names: Vec<&str> = AssetColumn::ALL.iter().map(|c| c.to_db_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 25);
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, col) in AssetColumn::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
        }
    }

    #[test]
    fn rejects_unknown_and_injected_names() {
        assert!("DROP TABLE assets".parse::<AssetColumn>().is_err());
        assert!("id".parse::<AssetColumn>().is_err());
        assert!("Status".parse::<AssetColumn>().is_err());
        assert!(matches!(
            "status; --".parse::<AssetColumn>(),
            Err(AppError::InvalidColumn(_))
        ));
    }

    #[test]
    fn parses_every_known_name() {
        for col in AssetColumn::ALL {
            assert_eq!(col.to_db_str().parse::<AssetColumn>().unwrap(), col);
        }
    }
}
