use clientscript::Catalog;
use eyre::Result;
use serde_json::json;

#[test]
fn descriptor_json_shape() -> Result<()> {
    let catalog = Catalog::init()?;

    let switch = serde_json::to_value(catalog.lookup_by_mnemonic("switch")?)?;
    assert_eq!(
        switch,
        json!({
            "code": 60,
            "mnemonic": "switch",
            "category": { "control_transfer": "switch" },
            "is_reserved": false,
            "effect": { "pops": { "ints": 1, "strings": 0 }, "pushes": { "ints": 0, "strings": 0 } },
        })
    );

    let reserved = serde_json::to_value(catalog.lookup_by_mnemonic("_1006")?)?;
    assert_eq!(reserved["category"], json!("unknown"));
    assert_eq!(reserved["is_reserved"], json!(true));
    assert_eq!(reserved["effect"], json!(null));
    Ok(())
}
