use std::{fs, path::Path, sync::Once};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
            .with_test_writer()
            .try_init();
    });
}

/// Writes a season file below `<root>/<country>/`
pub fn write_season_file(root: &Path, country: &str, season: &str, lines: &[&str]) {
    let dir = root.join(country);
    fs::create_dir_all(&dir).expect("Failed to create country directory");

    let mut contents = String::from("date,score,home_team,away_team\n");
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }

    fs::write(dir.join(season), contents).expect("Failed to write season file");
}
