//! `serde` serialisation for node trees.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Node;

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined => serializer.serialize_unit(),
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::List(list) => serializer.collect_seq(list.iter()),
            Self::Scalar(scalar) => scalar.value().serialize(serializer),
        }
    }
}
