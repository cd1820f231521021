use assert_cmd::Command;
use predicates::prelude::*;

use std::fs;

fn catalog() -> Command {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.env_remove("CATALOG_LOG");
    cmd
}

#[test]
fn test_list_all_products() {
    catalog()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID  Product"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Pillow"));
}

#[test]
fn test_list_name_filter_is_case_insensitive() {
    catalog()
        .args(["list", "--name", "PILLOW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pillow"))
        .stdout(predicate::str::contains("Milk").not());
}

#[test]
fn test_list_combined_filters_without_match() {
    catalog()
        .args(["list", "--owner", "Anna", "--category", "Drinks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products matching selected criteria"));
}

#[test]
fn test_list_json_output() {
    let output = catalog()
        .args(["list", "--owner", "1", "--category", "2", "--name", "o", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Coffee");
    assert_eq!(rows[0]["user"]["id"], 1);
    assert_eq!(rows[0]["category"]["title"], "Drinks");
}

#[test]
fn test_list_unknown_owner_fails() {
    catalog()
        .args(["list", "--owner", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no user matches 'nobody'"));
}

#[test]
fn test_users_and_categories() {
    catalog()
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna"));

    catalog()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics"));
}

#[test]
fn test_validate_bundled_catalog() {
    catalog()
        .arg("validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Catalog is valid"));
}

#[test]
fn test_data_dir_with_dangling_reference() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("users.json"),
        r#"[{"id":100,"name":"Max","sex":"m"}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("categories.json"),
        r#"[{"id":10,"title":"Fruits","icon":"🍎","ownerId":100}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("products.json"),
        r#"[{"id":1,"name":"Apple","categoryId":11}]"#,
    )
    .unwrap();

    catalog()
        .args(["validate", "--data"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "product 1 references unknown category 11",
        ));
}

#[test]
fn test_list_from_data_dir() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join("users.json"),
        r#"[{"id":100,"name":"Max","sex":"m"}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("categories.json"),
        r#"[{"id":10,"title":"Fruits","icon":"🍎","ownerId":100}]"#,
    )
    .unwrap();
    fs::write(
        temp.path().join("products.json"),
        r#"[{"id":1,"name":"Apple","categoryId":10}]"#,
    )
    .unwrap();

    catalog()
        .arg("list")
        .arg("--data")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Apple"))
        .stdout(predicate::str::contains("🍎 - Fruits"))
        .stdout(predicate::str::contains("Max"));
}
