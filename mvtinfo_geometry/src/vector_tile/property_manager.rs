use super::value::TileValue;
use thiserror::Error;

/// Errors raised when a feature's tag ids do not fit the layer's dictionaries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TagError {
	#[error("tag id list has odd length {0}")]
	OddLength(usize),
	#[error("key index {index} out of range ({len} keys)")]
	KeyOutOfRange { index: u32, len: usize },
	#[error("value index {index} out of range ({len} values)")]
	ValueOutOfRange { index: u32, len: usize },
}

/// The key and value dictionaries of a layer.
///
/// Indices are the identifiers features refer to, so entries are kept in wire order and never
/// deduplicated. A value message without any field is stored as `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyManager {
	pub key: Vec<String>,
	pub val: Vec<Option<TileValue>>,
}

impl PropertyManager {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_key(&mut self, key: String) -> u32 {
		self.key.push(key);
		(self.key.len() - 1) as u32
	}

	pub fn add_val(&mut self, value: Option<TileValue>) -> u32 {
		self.val.push(value);
		(self.val.len() - 1) as u32
	}

	pub fn iter_key(&self) -> impl Iterator<Item = &String> + '_ {
		self.key.iter()
	}

	pub fn iter_val(&self) -> impl Iterator<Item = Option<&TileValue>> + '_ {
		self.val.iter().map(Option::as_ref)
	}

	/// Resolves flattened `[key, value, key, value, ...]` tag ids against the dictionaries.
	///
	/// # Errors
	///
	/// Fails on an odd number of ids or on any index outside its dictionary.
	pub fn decode_tag_ids<'a>(&'a self, tag_ids: &[u32]) -> Result<Vec<(&'a str, Option<&'a TileValue>)>, TagError> {
		if tag_ids.len() % 2 != 0 {
			return Err(TagError::OddLength(tag_ids.len()));
		}

		tag_ids
			.chunks_exact(2)
			.map(|pair| {
				let (key_index, val_index) = (pair[0], pair[1]);
				let key = self.key.get(key_index as usize).ok_or(TagError::KeyOutOfRange {
					index: key_index,
					len: self.key.len(),
				})?;
				let val = self.val.get(val_index as usize).ok_or(TagError::ValueOutOfRange {
					index: val_index,
					len: self.val.len(),
				})?;
				Ok((key.as_str(), val.as_ref()))
			})
			.collect()
	}

	#[cfg(test)]
	pub fn from_slices(keys: &[&str], values: &[&str]) -> Self {
		Self {
			key: keys.iter().map(|k| (*k).to_string()).collect(),
			val: values.iter().map(|v| Some(TileValue::String((*v).to_string()))).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_returns_index() {
		let mut pm = PropertyManager::new();
		assert_eq!(pm.add_key("name".to_string()), 0);
		assert_eq!(pm.add_key("name".to_string()), 1);
		assert_eq!(pm.add_val(None), 0);
		assert_eq!(pm.add_val(Some(TileValue::Bool(true))), 1);
		assert_eq!(pm.iter_key().count(), 2);
		assert_eq!(pm.iter_val().collect::<Vec<_>>(), vec![None, Some(&TileValue::Bool(true))]);
	}

	#[test]
	fn decode_tag_ids() {
		let pm = PropertyManager::from_slices(&["class", "name"], &["river", "Spree"]);
		let river = TileValue::String("river".to_string());
		let spree = TileValue::String("Spree".to_string());
		assert_eq!(
			pm.decode_tag_ids(&[0, 0, 1, 1]),
			Ok(vec![("class", Some(&river)), ("name", Some(&spree))])
		);
		assert_eq!(pm.decode_tag_ids(&[]), Ok(vec![]));
	}

	#[test]
	fn decode_tag_ids_errors() {
		let pm = PropertyManager::from_slices(&["class"], &["river"]);
		assert_eq!(pm.decode_tag_ids(&[0]), Err(TagError::OddLength(1)));
		assert_eq!(
			pm.decode_tag_ids(&[1, 0]),
			Err(TagError::KeyOutOfRange { index: 1, len: 1 })
		);
		assert_eq!(
			pm.decode_tag_ids(&[0, 2]),
			Err(TagError::ValueOutOfRange { index: 2, len: 1 })
		);
		assert_eq!(
			TagError::KeyOutOfRange { index: 1, len: 1 }.to_string(),
			"key index 1 out of range (1 keys)"
		);
	}
}
