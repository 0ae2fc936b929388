//! 条目目录 - 由 id 确定性生成展示数据
//!
//! `ItemFactory` 是纯函数加记忆化缓存：同一进程内相同 id 永远得到相同的条目。
//! 缓存只做加速，不参与正确性，也不淘汰 (上限为 N)。

use std::collections::HashMap;

use shared::models::Item;
use thiserror::Error;

const NAMES: [&str; 15] = [
    "Алексей", "Мария", "Дмитрий", "Елена", "Сергей", "Ольга", "Иван", "Наталья", "Андрей",
    "Татьяна", "Кирилл", "Юлия", "Виктор", "Анна", "Роман",
];

const CATEGORIES: [&str; 10] = [
    "Техника",
    "Дизайн",
    "Администрирование",
    "Поддержка",
    "Продажи",
    "Маркетинг",
    "Разработка",
    "HR",
    "Финансы",
    "Аналитика",
];

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Item id {id} is outside 1..={total}")]
    OutOfRange { id: u32, total: u32 },
}

/// 条目工厂 (带缓存)
#[derive(Debug)]
pub struct ItemFactory {
    seed: u32,
    total: u32,
    cache: HashMap<u32, Item>,
}

impl ItemFactory {
    pub fn new(seed: u32, total: u32) -> Self {
        Self {
            seed,
            total,
            cache: HashMap::new(),
        }
    }

    /// 获取条目，未命中时生成并缓存
    pub fn get(&mut self, id: u32) -> Result<&Item, CatalogError> {
        if id == 0 || id > self.total {
            return Err(CatalogError::OutOfRange {
                id,
                total: self.total,
            });
        }
        let seed = self.seed;
        Ok(&*self.cache.entry(id).or_insert_with(|| generate(id, seed)))
    }

    /// Resolve a slice of ids, in order
    pub fn get_many(&mut self, ids: &[u32]) -> Result<Vec<Item>, CatalogError> {
        ids.iter().map(|&id| self.get(id).cloned()).collect()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// 已缓存的条目数
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// 清空缓存 (reset 时调用)
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Pure derivation of an item from its id and the process seed
pub fn generate(id: u32, seed: u32) -> Item {
    let name = NAMES[id as usize % NAMES.len()];
    let category = CATEGORIES[(u64::from(id) * u64::from(seed) % CATEGORIES.len() as u64) as usize];
    Item {
        id,
        name: format!("{} {}", name, id),
        category: category.to_string(),
    }
}
