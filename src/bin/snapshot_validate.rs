use naxxramas::persistence::store::InstanceStore;
use std::path::PathBuf;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let Some(dir) = args.get(1) else {
        return Err("usage: snapshot_validate <instance-save-dir>".to_string());
    };
    let store = InstanceStore::new(PathBuf::from(dir));
    let report = store.validate_snapshots();

    println!("instance snapshot check:");
    println!("- dir: {}", store.dir().display());
    if report.missing_dir {
        println!("- missing directory");
        return Err(format!("{} does not exist", store.dir().display()));
    }
    println!("- snapshot files: {}", report.files);
    println!("- parsed: {}", report.parsed);
    println!("- skipped: {}", report.skipped);
    println!("- errors: {}", report.errors.len());
    if !report.errors.is_empty() {
        println!("errors:");
        for err in &report.errors {
            println!("- {}", err);
        }
        return Err("invalid instance snapshots detected".to_string());
    }

    Ok(())
}
