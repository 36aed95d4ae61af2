use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// French high-speed lines, one row per track
pub const TGV_EDGES: &str = "name1;name2;distance
Paris;Lille;204
Paris;Rennes;355
Paris;Bordeaux;499
Paris;Metz;330
Paris;Lyon;391
Lyon;Marseille;278
Lyon;Strasbourg;382
Metz;Strasbourg;129
Bordeaux;Marseille;505
";

/// Two metro lines sharing "Chatelet", one platform ID per line
pub const METRO_EDGES: &str = "name1;name2;distance
1;2;2
2;3;2
3;4;3
10;11;4
11;12;1
2;11;1
";

pub const METRO_STATIONS: &str = "id;name;line
1;Louvre;1
2;Chatelet;1
3;Hotel de Ville;1
4;Bastille;1
10;Gare du Nord;4
11;Chatelet;4
12;Cite;4
";

/// Get a Command for railgraph, isolated from any user configuration
pub fn railgraph(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("railgraph");
    cmd.current_dir(dir)
        .env_remove("RAILGRAPH_CONFIG")
        .env_remove("RAILGRAPH_EDGES")
        .env_remove("RUST_LOG")
        .env_remove("RAILGRAPH_LOG")
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir);
    cmd
}

/// Write `content` to `name` inside `dir` and return the path
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding `tgv.csv`
pub fn tgv_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tgv.csv", TGV_EDGES);
    dir
}

/// Temp dir holding `metro.csv` and `stations.csv`
#[allow(dead_code)]
pub fn metro_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "metro.csv", METRO_EDGES);
    write_file(&dir, "stations.csv", METRO_STATIONS);
    dir
}
