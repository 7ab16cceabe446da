use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;

pub mod models;
pub mod seed;

use models::{
    Animal, DonationOption, NewAnimal, NewDonationOption, NewNewsletter, NewShopItem, NewUser,
    Newsletter, ShopItem, User,
};

pub type DbPool = Arc<MemStore>;

/// Records of one type keyed by id, plus the next id to hand out.
///
/// Ids start at 1 and only ever grow. Iteration follows id order, which is
/// also insertion order since nothing is removed.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Ids outside the `i32` range were never handed out, so they miss.
    pub fn get(&self, id: i64) -> Option<T> {
        let id = i32::try_from(id).ok()?;
        self.rows.get(&id).cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(row)).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// All five tables. Each sits behind its own lock so id assignment and the
/// insert happen atomically with respect to other requests.
#[derive(Debug, Default)]
pub struct MemStore {
    users: RwLock<Table<User>>,
    animals: RwLock<Table<Animal>>,
    newsletters: RwLock<Table<Newsletter>>,
    shop_items: RwLock<Table<ShopItem>>,
    donation_options: RwLock<Table<DonationOption>>,
}

fn read<'a, T>(lock: &'a RwLock<Table<T>>, table: &str) -> anyhow::Result<RwLockReadGuard<'a, Table<T>>> {
    lock.read()
        .map_err(|_| anyhow::anyhow!("{} table lock poisoned", table))
}

fn write<'a, T>(lock: &'a RwLock<Table<T>>, table: &str) -> anyhow::Result<RwLockWriteGuard<'a, Table<T>>> {
    lock.write()
        .map_err(|_| anyhow::anyhow!("{} table lock poisoned", table))
}

impl MemStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store with the fixed animals, shop items and donation options loaded.
    pub fn seeded() -> anyhow::Result<Self> {
        let store = Self::empty();
        for animal in seed::animals() {
            store.insert_animal(animal)?;
        }
        for item in seed::shop_items() {
            store.insert_shop_item(item)?;
        }
        for option in seed::donation_options() {
            store.insert_donation_option(option)?;
        }
        Ok(store)
    }

    fn insert_animal(&self, new: NewAnimal) -> anyhow::Result<Animal> {
        let mut animals = write(&self.animals, "animals")?;
        let now = Utc::now();
        Ok(animals.insert_with(|id| Animal {
            id,
            name: new.name,
            kind: new.kind,
            breed: new.breed,
            age: new.age,
            gender: new.gender,
            image: new.image,
            description: new.description,
            is_adopted: new.is_adopted,
            is_rescued: new.is_rescued,
            created_at: now,
        }))
    }

    fn insert_shop_item(&self, new: NewShopItem) -> anyhow::Result<ShopItem> {
        let mut items = write(&self.shop_items, "shop_items")?;
        Ok(items.insert_with(|id| ShopItem {
            id,
            name: new.name,
            price: new.price,
            description: new.description,
            image: new.image,
            rating: new.rating.min(5),
            category: new.category,
        }))
    }

    /// Poisons every table lock, as a writer panicking mid-insert would.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        fn poison_one<T: Send + Sync>(lock: &RwLock<Table<T>>) {
            std::thread::scope(|s| {
                let _ = s
                    .spawn(|| {
                        let _guard = lock.write();
                        panic!("poisoning table lock");
                    })
                    .join();
            });
        }
        poison_one(&self.users);
        poison_one(&self.animals);
        poison_one(&self.newsletters);
        poison_one(&self.shop_items);
        poison_one(&self.donation_options);
    }

    fn insert_donation_option(&self, new: NewDonationOption) -> anyhow::Result<DonationOption> {
        let mut options = write(&self.donation_options, "donation_options")?;
        Ok(options.insert_with(|id| DonationOption {
            id,
            title: new.title,
            description: new.description,
            amount: new.amount,
            category: new.category,
            icon: new.icon,
        }))
    }
}

pub async fn init_pool(seed: bool) -> anyhow::Result<DbPool> {
    let store = if seed { MemStore::seeded()? } else { MemStore::empty() };
    Ok(Arc::new(store))
}

// Users

pub async fn get_user(pool: &DbPool, id: i64) -> anyhow::Result<Option<User>> {
    Ok(read(&pool.users, "users")?.get(id))
}

pub async fn get_user_by_email(pool: &DbPool, email: &str) -> anyhow::Result<Option<User>> {
    Ok(read(&pool.users, "users")?.find(|u| u.email == email))
}

/// Inserts the user unless the email is already registered. The check and
/// the insert share one write lock. `None` means the email was taken.
pub async fn register_user(pool: &DbPool, new: NewUser) -> anyhow::Result<Option<User>> {
    let mut users = write(&pool.users, "users")?;
    if users.find(|u| u.email == new.email).is_some() {
        return Ok(None);
    }
    Ok(Some(users.insert_with(|id| User {
        id,
        name: new.name,
        email: new.email,
        password: new.password,
    })))
}

pub async fn user_count(pool: &DbPool) -> anyhow::Result<usize> {
    Ok(read(&pool.users, "users")?.len())
}

// Animals

pub async fn list_animals(pool: &DbPool) -> anyhow::Result<Vec<Animal>> {
    Ok(read(&pool.animals, "animals")?.all())
}

/// Animals whose type matches `kind` exactly. Unknown kinds match nothing.
pub async fn list_animals_by_type(pool: &DbPool, kind: &str) -> anyhow::Result<Vec<Animal>> {
    Ok(read(&pool.animals, "animals")?.filter(|a| a.kind.as_str() == kind))
}

pub async fn get_animal(pool: &DbPool, id: i64) -> anyhow::Result<Option<Animal>> {
    Ok(read(&pool.animals, "animals")?.get(id))
}

pub async fn create_animal(pool: &DbPool, new: NewAnimal) -> anyhow::Result<Animal> {
    pool.insert_animal(new)
}

// Newsletter

/// Adds a subscriber and stamps `createdAt`, unless the email is already on
/// the list. `None` means the email was already subscribed.
pub async fn subscribe_unique(pool: &DbPool, new: NewNewsletter) -> anyhow::Result<Option<Newsletter>> {
    let mut newsletters = write(&pool.newsletters, "newsletters")?;
    if newsletters.find(|n| n.email == new.email).is_some() {
        return Ok(None);
    }
    let now = Utc::now();
    Ok(Some(newsletters.insert_with(|id| Newsletter {
        id,
        name: new.name,
        email: new.email,
        created_at: now,
    })))
}

pub async fn get_subscription_by_email(pool: &DbPool, email: &str) -> anyhow::Result<Option<Newsletter>> {
    Ok(read(&pool.newsletters, "newsletters")?.find(|n| n.email == email))
}

pub async fn list_subscriptions(pool: &DbPool) -> anyhow::Result<Vec<Newsletter>> {
    Ok(read(&pool.newsletters, "newsletters")?.all())
}

// Shop

pub async fn list_shop_items(pool: &DbPool) -> anyhow::Result<Vec<ShopItem>> {
    Ok(read(&pool.shop_items, "shop_items")?.all())
}

pub async fn get_shop_item(pool: &DbPool, id: i64) -> anyhow::Result<Option<ShopItem>> {
    Ok(read(&pool.shop_items, "shop_items")?.get(id))
}

pub async fn create_shop_item(pool: &DbPool, new: NewShopItem) -> anyhow::Result<ShopItem> {
    pool.insert_shop_item(new)
}

// Donation options

pub async fn list_donation_options(pool: &DbPool) -> anyhow::Result<Vec<DonationOption>> {
    Ok(read(&pool.donation_options, "donation_options")?.all())
}

pub async fn list_donation_options_by_category(pool: &DbPool, category: &str) -> anyhow::Result<Vec<DonationOption>> {
    Ok(read(&pool.donation_options, "donation_options")?.filter(|o| o.category.as_str() == category))
}

pub async fn create_donation_option(pool: &DbPool, new: NewDonationOption) -> anyhow::Result<DonationOption> {
    pool.insert_donation_option(new)
}
