use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ont_wasm() -> Command {
    let mut cmd = Command::cargo_bin("ont-wasm").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("ONT_WASM_CONFIG");
    cmd
}

#[test]
fn test_help() {
    ont_wasm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn test_deploy_with_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ont.toml");
    std::fs::write(
        &config,
        "[transaction]\ngas_price = 700\n\n[account]\naddress = \"AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM\"\n",
    )
    .unwrap();

    let output = ont_wasm()
        .args(["--config", config.to_str().unwrap()])
        .args(["deploy", "--code", "4d5a", "--name", "MyContract", "--version", "1.0"])
        .args(["--author", "a@b.com", "--email", "x@y.com", "--desc", "desc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hash: "))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let tx = stdout
        .lines()
        .find_map(|line| line.strip_prefix("tx: "))
        .unwrap()
        .to_string();

    ont_wasm()
        .args(["inspect", &tx])
        .assert()
        .success()
        .stdout(predicate::str::contains("gas_price: 700"))
        .stdout(predicate::str::contains("payer: AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"))
        .stdout(predicate::str::contains("description: desc"));
}

#[test]
fn test_deploy_rejects_odd_hex() {
    ont_wasm()
        .args(["--payer", "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"])
        .args(["deploy", "--code", "abc", "--name", "n", "--version", "v"])
        .args(["--author", "a", "--email", "e", "--desc", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decode error"));
}

#[test]
fn test_invoke_with_abi() {
    let dir = TempDir::new().unwrap();
    let abi = dir.path().join("oep4.json");
    std::fs::write(
        &abi,
        r#"{ "functions": [ { "name": "balanceOf", "parameters": [ { "name": "owner", "type": "Address" } ] } ] }"#,
    )
    .unwrap();

    ont_wasm()
        .args(["abi", abi.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oep4Contract"))
        .stdout(predicate::str::contains("balanceOf(owner: Address)"));

    ont_wasm()
        .args(["--contract", "0x0000000000000000000000000000000000000001"])
        .args(["--payer", "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"])
        .args(["invoke", "--abi", abi.to_str().unwrap(), "--method", "balanceOf"])
        .args(["--arg", "\"AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM\""])
        .assert()
        .success()
        .stdout(predicate::str::contains("tx: 00d2"));

    ont_wasm()
        .args(["--contract", "0x0000000000000000000000000000000000000001"])
        .args(["--payer", "AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM"])
        .args(["invoke", "--abi", abi.to_str().unwrap(), "--method", "balanceOf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 1 arguments"));
}

#[test]
fn test_deploy_without_payer_fails() {
    ont_wasm()
        .args(["deploy", "--code", "4d5a", "--name", "n", "--version", "v"])
        .args(["--author", "a", "--email", "e", "--desc", "d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no payer address"));
}

#[test]
fn test_config_after_subcommand() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ont.toml");
    std::fs::write(&config, "[account]\naddress = \"AFmseVrdL9f9oyCzZefL9tG6UbvhPbdYzM\"\n").unwrap();

    ont_wasm()
        .args(["deploy", "--code", "4d5a", "--name", "n", "--version", "v"])
        .args(["--author", "a", "--email", "e", "--desc", "d"])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hash: "));
}

#[test]
fn test_inspect_rejects_garbage() {
    ont_wasm().args(["inspect", "00ff"]).assert().failure();
}
