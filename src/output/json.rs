//! JSON output for allocation results.

use crate::processing::Allocation;
use std::error::Error;

/// Pretty JSON document for an allocation, with the unassigned count added.
pub fn to_json(allocation: &Allocation) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(allocation)?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "unassigned_addresses".to_string(),
            allocation.unassigned_addresses().into(),
        );
    }
    serde_json::to_string_pretty(&value)
}

pub fn print_json(allocation: &Allocation) -> Result<(), Box<dyn Error>> {
    let json = to_json(allocation).map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}
