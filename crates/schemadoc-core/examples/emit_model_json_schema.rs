use schemadoc_core::DataModel;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(DataModel);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
