//! Fixed rows loaded at startup so the site has something to show.

use super::models::{AnimalType, DonationCategory, Gender, NewAnimal, NewDonationOption, NewShopItem};

fn animal(
    name: &str,
    kind: AnimalType,
    breed: &str,
    age: &str,
    gender: Gender,
    image: &str,
    description: &str,
) -> NewAnimal {
    NewAnimal {
        name: name.to_string(),
        kind,
        breed: breed.to_string(),
        age: age.to_string(),
        gender,
        image: image.to_string(),
        description: description.to_string(),
        is_adopted: false,
        is_rescued: true,
    }
}

pub fn animals() -> Vec<NewAnimal> {
    use AnimalType::{Cat, Dog};
    use Gender::{Female, Male};

    vec![
        animal("Buddy", Dog, "Mixed Breed", "2 months", Male,
            "https://images.unsplash.com/photo-1601979031925-424e53b6caaa",
            "Found abandoned near a construction site, Buddy is now thriving with proper care and attention."),
        animal("Luna", Cat, "Domestic Shorthair", "1 year", Female,
            "https://images.unsplash.com/photo-1573865526739-10659fec78a5",
            "Rescued from a drainage pipe during monsoon, Luna is now a playful and affectionate cat."),
        animal("Max", Dog, "Labrador Mix", "8 months", Male,
            "https://images.unsplash.com/photo-1550697851-920b181d8ca8",
            "Found malnourished on the streets, Max has made a remarkable recovery and loves playing fetch."),
        animal("Rocky", Dog, "Indian Pariah", "3 years", Male,
            "https://images.unsplash.com/photo-1583511655857-d19b40a7a54e",
            "Rocky is a friendly and energetic dog who loves outdoor activities and playing fetch. Good with children and other pets."),
        animal("Misha", Cat, "Domestic Shorthair", "2 years", Female,
            "https://images.unsplash.com/photo-1533738363-b7f9aef128ce",
            "Misha is a gentle and affectionate cat who enjoys quiet moments and occasional play. Perfect for a calm household."),
        animal("Leo", Dog, "Mixed Breed", "4 years", Male,
            "https://images.unsplash.com/photo-1511044568932-338cba0ad803",
            "Leo is a loyal and protective dog who bonds deeply with his humans. Needs an active family with some dog experience."),
        animal("Bella", Cat, "Persian Mix", "1 year", Female,
            "https://images.unsplash.com/photo-1571566882372-1598d88abd90",
            "Bella is a playful and curious cat who loves to explore. She's good with other cats and enjoys interactive toys."),
        animal("Buddy", Dog, "Labrador Mix", "5 years", Male,
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb",
            "Buddy is a calm and gentle soul who loves lounging around. Great with children and perfect for a relaxed home."),
        animal("Oscar", Cat, "Tabby", "3 years", Male,
            "https://images.unsplash.com/photo-1543852786-1cf6624b9987",
            "Oscar is an independent cat who appreciates his quiet time but also enjoys gentle pets. Best for a mature household."),
    ]
}

fn shop_item(name: &str, price: i64, description: &str, image: &str, rating: u8, category: &str) -> NewShopItem {
    NewShopItem {
        name: name.to_string(),
        price,
        description: description.to_string(),
        image: image.to_string(),
        rating,
        category: category.to_string(),
    }
}

pub fn shop_items() -> Vec<NewShopItem> {
    vec![
        shop_item("Eco-Friendly Dog Toy", 399,
            "Durable, non-toxic toy made from sustainable materials. Perfect for energetic dogs.",
            "https://images.unsplash.com/photo-1581467655410-0c2bf55d9d6c", 5, "toy"),
        shop_item("Cat Climbing Tree", 1499,
            "Multi-level climbing tree with scratching posts and cozy hideaways for your feline friend.",
            "https://images.unsplash.com/photo-1559715541-5daf8a0296c0", 5, "accessory"),
        shop_item("\"Rescue Dad\" T-Shirt", 599,
            "Comfortable, 100% cotton tee with our \"Proud Rescue Dad\" design. Available in multiple sizes.",
            "https://images.unsplash.com/photo-1589831377283-33cb1cc6bd5d", 4, "clothing"),
        shop_item("Adjustable Pet Leash", 349,
            "Durable nylon leash with adjustable length and comfortable padded handle for daily walks.",
            "https://images.unsplash.com/photo-1601758125946-6ec2ef64daf8", 5, "accessory"),
    ]
}

fn option(title: &str, description: &str, amount: i64, category: DonationCategory, icon: &str) -> NewDonationOption {
    NewDonationOption {
        title: title.to_string(),
        description: description.to_string(),
        amount,
        category,
        icon: icon.to_string(),
    }
}

pub fn donation_options() -> Vec<NewDonationOption> {
    use DonationCategory::{Food, Medical, Shelter};

    vec![
        option("Feed 5 strays for a day", "Provide nutritious meals for 5 stray animals for a full day.", 100, Food, "utensils"),
        option("Feed 15 strays for a day", "Provide nutritious meals for 15 stray animals for a full day.", 300, Food, "utensils"),
        option("Feed 30 strays for a day", "Provide nutritious meals for 30 stray animals for a full day.", 600, Food, "utensils"),
        option("Basic checkup for one animal", "Fund a complete health check for one rescued animal.", 500, Medical, "stethoscope"),
        option("Vaccination package", "Provide essential vaccines for one rescued animal.", 1200, Medical, "syringe"),
        option("Emergency surgery fund", "Contribute to our emergency surgery fund for critical cases.", 5000, Medical, "hospital"),
        option("Blankets and bedding", "Provide warm blankets and bedding for animals in our shelter.", 800, Shelter, "bed"),
        option("Monthly shelter supplies", "Fund a month's worth of essential supplies for our shelter.", 2500, Shelter, "home"),
        option("Shelter expansion project", "Help us expand our shelter to accommodate more animals in need.", 10000, Shelter, "building"),
    ]
}
