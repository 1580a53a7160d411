use std::cell::{
    Ref,
    RefCell
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;

/// 以名稱索引、由 JSON 建構的物件登錄表
///
/// 批次載入先解析全部物件，全部成功後才寫入；任一筆失敗時登錄表維持原狀。
pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>>;

    fn parse_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError>;

    fn commit(&self, objects: Vec<(String, V)>);

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn parse_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<Vec<(String, V)>, ManagerError> {
        json_vec
            .iter()
            .map(|j| self.parse_obj_from_json(j.clone()))
            .collect()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let object = self.parse_obj_from_json(json_value)?;
        self.commit(vec![object]);
        Ok(())
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        let objects = self.parse_obj_from_json_vec(json_vec)?;
        self.commit(objects);
        Ok(())
    }

    fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = ManagerError::from_json_or_json_parse_error(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            self.insert_obj_from_json(json_value)
        }
    }
}

pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json }
    }

    pub fn len(&self) -> usize {
        self.map_cell.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_cell.borrow().is_empty()
    }
}

impl<V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> Ref<'_, BTreeMap<String, V>> {
        self.map_cell.borrow()
    }

    fn parse_obj_from_json(&self, json_value: serde_json::Value) -> Result<(String, V), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        Ok((named_object.name().to_owned(), v))
    }

    fn commit(&self, objects: Vec<(String, V)>) {
        let mut map = self.map_cell.borrow_mut();
        for (name, v) in objects {
            debug!(name = name.as_str(), "registered object");
            map.insert(name, v);
        }
    }
}
