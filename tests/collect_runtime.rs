//! End-to-end collection through a runtime process.
//!
//! A POSIX `sh` script stands in for the runtime. Tests that talk to a real
//! Docker daemon are marked `#[ignore]`.
//! Run with: `cargo test -- --ignored`

use dilogs::collector::{collect_and_print, section_header};
use dilogs::config::Config;
use dilogs::runtime::{CliLogSource, RuntimeCommand};

/// Runtime that knows `minion` and `etcd` and fails for anything else, the way
/// `docker logs` does for a missing container.
#[cfg(unix)]
fn fake_runtime() -> RuntimeCommand {
    let script = r#"
case "$2" in
  minion) printf 'boot ok\nwatching etcd' ;;
  etcd) echo "member started"; echo "warning: slow disk" >&2 ;;
  *) echo "Error: No such container: $2" >&2; exit 1 ;;
esac
"#;
    RuntimeCommand::parse(&shell_words::join(["sh", "-c", script, "sh"])).unwrap()
}

fn collect(runtime: RuntimeCommand, containers: &[String]) -> String {
    let mut source = CliLogSource::new(runtime);
    let mut out = Vec::new();
    collect_and_print(containers, &mut source, &mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).unwrap()
}

#[cfg(unix)]
#[test]
fn default_list_gets_one_section_each() {
    let cfg = Config::default();
    let out = collect(fake_runtime(), &cfg.containers);

    let mut last = 0;
    for name in &cfg.containers {
        let pos = out.find(&section_header(name)).expect("missing header");
        assert!(pos >= last, "header for {name} out of order");
        last = pos;
    }

    let after_minion = format!("{}\nboot ok\nwatching etcd\n\n", section_header("minion"));
    assert!(out.starts_with(&after_minion));
    assert!(out.contains("member started\n"));
    assert!(out.contains("warning: slow disk\n"));
    assert!(out.contains("Error: No such container: ovn-northd"));
}

#[cfg(unix)]
#[test]
fn failure_does_not_stop_later_containers() {
    let names: Vec<String> = ["swarm", "etcd"].iter().map(|s| s.to_string()).collect();
    let out = collect(fake_runtime(), &names);

    let swarm = out.find(&section_header("swarm")).unwrap();
    let missing = out.find("No such container: swarm").unwrap();
    let etcd = out.find(&section_header("etcd")).unwrap();
    assert!(swarm < missing && missing < etcd);
    assert!(out[etcd..].contains("member started"));
}

#[test]
fn missing_runtime_is_reported_inline() {
    let runtime = RuntimeCommand::parse("/nonexistent/dilogs-runtime").unwrap();
    let names = vec!["minion".to_string(), "etcd".to_string()];
    let out = collect(runtime, &names);

    assert_eq!(out.matches("failed to run `/nonexistent/dilogs-runtime logs").count(), 2);
    assert!(out.find(&section_header("minion")).unwrap() < out.find(&section_header("etcd")).unwrap());
}

#[test]
fn empty_list_produces_no_output() {
    let runtime = RuntimeCommand::parse("/nonexistent/dilogs-runtime").unwrap();
    assert!(collect(runtime, &[]).is_empty());
}

#[test]
#[ignore]
fn docker_reports_unknown_container() {
    let runtime = RuntimeCommand::parse("docker").unwrap();
    let names = vec!["dilogs-no-such-container".to_string()];
    let out = collect(runtime, &names);

    assert!(out.starts_with(&section_header("dilogs-no-such-container")));
    assert!(out.contains("docker logs dilogs-no-such-container"));
}
