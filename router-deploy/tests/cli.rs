// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, process::Output};

use assert_cmd::Command;

const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

fn router_deploy(args: &[&str]) -> Output {
    Command::cargo_bin("router-deploy")
        .expect("binary built")
        .env_remove("ROUTER_DEPLOY_MNEMONIC")
        .env_remove("ROUTER_DEPLOY_PRIVATE_KEY")
        .env_remove("ROUTER_DEPLOY_API_KEY")
        .env_remove("ROUTER_DEPLOY_CONFIG")
        .args(args)
        .output()
        .expect("command ran")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn resolves_weth_per_network() {
    let cases = [
        ("mainnet", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
        ("ropsten", "0xc778417E063141139Fce010982780140Aa0cD5Ab"),
        ("rinkeby", "0xc778417E063141139Fce010982780140Aa0cD5Ab"),
    ];
    for (network, expected) in cases {
        let output = router_deploy(&["weth", "--network", network]);
        assert!(output.status.success(), "{}", stderr(&output));
        assert_eq!(stdout(&output).trim(), expected);
    }
}

#[test]
fn unknown_network_is_a_config_error() {
    let output = router_deploy(&["weth", "--network", "sepolia"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("sepolia"));
}

#[test]
fn lists_networks() {
    let output = router_deploy(&["networks"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    for network in ["mainnet", "ropsten", "rinkeby", "goerli", "kovan"] {
        assert!(out.contains(network), "missing {network} in {out}");
    }
    assert!(out.contains("solc"));
    assert!(out.contains("0.6.6"));
    assert!(out.contains("fee to setter"));
    let out = out.to_lowercase();
    assert!(out.contains("0x4207cd6e113e364220ec08e2ff446973437859fd"));
    assert!(out.contains("0xa39700d35cefac22f6364b9add8adc5aefb273f0"));
}

#[test]
fn config_file_adds_networks() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("deploy.toml");
    fs::write(
        &config,
        r#"
        [networks.development]
        endpoint = "http://localhost:8545"
        network_id = 1337

        [wrapped_native]
        development = "0x1111111111111111111111111111111111111111"
        "#,
    )
    .unwrap();
    let config = config.to_str().unwrap();

    let output = router_deploy(&["weth", "--network", "development", "--config", config]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "0x1111111111111111111111111111111111111111"
    );

    let output = router_deploy(&["networks", "--config", config]);
    assert!(stdout(&output).contains("development"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("deploy.toml");
    fs::write(&config, "[networks.broken]\nnetwork_id = \"one\"\n").unwrap();
    let output = router_deploy(&["networks", "--config", config.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid config"));
}

#[test]
fn prints_derived_accounts() {
    let output = router_deploy(&[
        "accounts",
        "--mnemonic",
        DEV_MNEMONIC,
        "--account-count",
        "2",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
        ]
    );
}

#[test]
fn deploy_rejects_unknown_network_before_connecting() {
    let output = router_deploy(&[
        "deploy",
        "--network",
        "sepolia",
        "--artifact",
        "UniswapV2Router02.json",
        "--mnemonic",
        DEV_MNEMONIC,
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("sepolia"));
}

#[test]
fn deploy_needs_an_api_key_for_templated_endpoints() {
    let output = router_deploy(&[
        "deploy",
        "--network",
        "mainnet",
        "--artifact",
        "UniswapV2Router02.json",
        "--mnemonic",
        DEV_MNEMONIC,
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("API key"));
}

#[test]
fn deploy_checks_artifact_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("missing.json");
    let output = router_deploy(&[
        "deploy",
        "--network",
        "mainnet",
        "--artifact",
        artifact.to_str().unwrap(),
        // nothing listens here
        "--endpoint",
        "http://127.0.0.1:9",
        "--mnemonic",
        DEV_MNEMONIC,
    ]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("failed to read artifact"), "{err}");
    assert!(err.contains("missing.json"), "{err}");
}

#[test]
fn deploy_rejects_artifact_with_wrong_constructor() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("Router.json");
    fs::write(
        &artifact,
        r#"{"contractName":"Router","abi":[{"type":"constructor","stateMutability":"nonpayable","inputs":[{"name":"f","type":"address"}]}],"bytecode":"0x6080"}"#,
    )
    .unwrap();
    let output = router_deploy(&[
        "deploy",
        "--network",
        "mainnet",
        "--artifact",
        artifact.to_str().unwrap(),
        "--endpoint",
        "http://127.0.0.1:9",
        "--mnemonic",
        DEV_MNEMONIC,
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("constructor must take"));
}
