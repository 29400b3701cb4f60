//! Deterministic synthetic identity data from curated lists.
//!
//! Names, addresses, company names, and product names all come from fixed
//! lists indexed by the passed RNG stream, so a seed fully determines every
//! generated string (same seed = same identities).

use crate::rng::StageRng;

/// Deterministic identity generator backed by curated lists.
pub struct Synth;

impl Synth {
    pub fn first_name(rng: &mut StageRng) -> &'static str {
        *rng.pick(Self::first_names())
    }

    pub fn last_name(rng: &mut StageRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Email derived from the name plus a numeric suffix, so repeated
    /// names still yield distinct-looking addresses.
    pub fn email(first: &str, last: &str, rng: &mut StageRng) -> String {
        let domain = rng.pick(Self::email_domains());
        let suffix = rng.int_in(1, 99);
        format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            suffix,
            domain
        )
    }

    /// US-style phone number: (AAA) BBB-CCCC.
    pub fn phone(rng: &mut StageRng) -> String {
        format!(
            "({}) {}-{:04}",
            rng.int_in(200, 999),
            rng.int_in(200, 999),
            rng.int_in(0, 9999)
        )
    }

    /// Street address: house number + street name + suffix.
    pub fn street_address(rng: &mut StageRng) -> String {
        let number = rng.int_in(100, 9999);
        let street = rng.pick(Self::street_names());
        let suffix = rng.pick(Self::street_suffixes());
        format!("{number} {street} {suffix}")
    }

    pub fn city(rng: &mut StageRng) -> &'static str {
        *rng.pick(Self::cities())
    }

    pub fn state_abbr(rng: &mut StageRng) -> &'static str {
        *rng.pick(Self::state_abbrs())
    }

    /// Five-digit ZIP code.
    pub fn postal_code(rng: &mut StageRng) -> String {
        format!("{:05}", rng.int_in(10000, 99999))
    }

    /// Company name: "Stem Suffix" (used for product brands).
    pub fn company_name(rng: &mut StageRng) -> String {
        let stem = rng.pick(Self::company_stems());
        let suffix = rng.pick(Self::company_suffixes());
        format!("{stem} {suffix}")
    }

    /// Catch-phrase product name: "Adjective Material Noun".
    pub fn product_name(rng: &mut StageRng) -> String {
        let adjective = rng.pick(Self::product_adjectives());
        let material = rng.pick(Self::product_materials());
        let noun = rng.pick(Self::product_nouns());
        format!("{adjective} {material} {noun}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
            "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
            "Jessica", "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa",
            "Daniel", "Nancy", "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra",
            "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna",
            "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Dorothy",
            "George", "Melissa", "Edward", "Deborah", "Ronald", "Stephanie", "Timothy",
            "Rebecca", "Jason", "Sharon", "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob",
            "Kathleen", "Gary", "Amy", "Nicholas", "Angela", "Eric", "Shirley", "Jonathan",
            "Anna", "Stephen", "Brenda", "Larry", "Pamela", "Justin", "Emma", "Scott",
            "Nicole", "Brandon", "Helen", "Benjamin", "Samantha", "Samuel", "Katherine",
            "Gregory", "Christine", "Frank", "Debra", "Alexander", "Rachel", "Patrick",
            "Carolyn", "Raymond", "Janet", "Jack", "Catherine", "Dennis", "Maria", "Jerry",
            "Heather", "Tyler", "Diane", "Aaron", "Ruth", "Jose", "Julie", "Adam", "Olivia",
            "Nathan", "Joyce", "Henry", "Virginia",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
            "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
            "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz",
            "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales",
            "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
            "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson",
            "Watson", "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza",
            "Ruiz", "Hughes", "Price", "Alvarez", "Castillo", "Sanders", "Patel", "Myers",
            "Long", "Ross", "Foster", "Jimenez",
        ]
    }

    fn email_domains() -> &'static [&'static str] {
        &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "aol.com"]
    }

    fn street_names() -> &'static [&'static str] {
        &[
            "Maple", "Oak", "Cedar", "Elm", "Washington", "Lake", "Hill", "Sunset", "Park",
            "Main", "Walnut", "Chestnut", "River", "Spring", "Highland", "Meadow",
            "Franklin", "Jefferson", "Lincoln", "Madison", "Prospect", "Grove", "Sycamore",
            "Magnolia", "Dogwood", "Juniper", "Birch", "Hickory", "Willow", "Aspen",
        ]
    }

    fn street_suffixes() -> &'static [&'static str] {
        &["St", "Ave", "Blvd", "Dr", "Ln", "Rd", "Ct", "Way", "Ter", "Pl"]
    }

    fn cities() -> &'static [&'static str] {
        &[
            "Springfield", "Riverton", "Fairview", "Georgetown", "Clinton", "Salem",
            "Madison", "Franklin", "Arlington", "Ashland", "Burlington", "Clayton",
            "Dayton", "Dover", "Greenville", "Hudson", "Jackson", "Kingston", "Lebanon",
            "Lexington", "Manchester", "Marion", "Milton", "Newport", "Oakland", "Oxford",
            "Princeton", "Richmond", "Riverside", "Rochester", "Shelby", "Trenton", "Troy",
            "Union", "Vernon", "Warren", "Waverly", "Winchester", "Woodstock", "York",
        ]
    }

    fn state_abbrs() -> &'static [&'static str] {
        &[
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL",
            "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT",
            "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI",
            "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
        ]
    }

    fn company_stems() -> &'static [&'static str] {
        &[
            "Apex", "Northwind", "Bluebird", "Cascade", "Summit", "Lakeside", "Pinnacle",
            "Harbor", "Beacon", "Orchard", "Granite", "Silverline", "Redwood", "Crestview",
            "Ironwood", "Clearwater", "Stonebridge", "Fairfield", "Brightpath", "Goldleaf",
            "Evergreen", "Maplewood", "Foxglove", "Windmere",
        ]
    }

    fn company_suffixes() -> &'static [&'static str] {
        &[
            "Group", "Labs", "Co", "Corp", "Industries", "Trading", "Outfitters", "Supply",
            "Works", "Brands", "Collective", "Goods",
        ]
    }

    fn product_adjectives() -> &'static [&'static str] {
        &[
            "Ergonomic", "Sleek", "Rustic", "Intelligent", "Durable", "Compact",
            "Lightweight", "Premium", "Handcrafted", "Refined", "Practical", "Gorgeous",
            "Enormous", "Incredible", "Modern", "Sturdy", "Elegant", "Versatile",
            "Portable", "Classic",
        ]
    }

    fn product_materials() -> &'static [&'static str] {
        &[
            "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber",
            "Leather", "Silk", "Wool", "Linen", "Marble", "Iron", "Bronze", "Copper",
            "Aluminum", "Ceramic", "Glass", "Bamboo", "Carbon",
        ]
    }

    fn product_nouns() -> &'static [&'static str] {
        &[
            "Chair", "Desk", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves",
            "Pants", "Shirt", "Table", "Shoes", "Hat", "Towels", "Bottle", "Coat", "Watch",
            "Wallet", "Bench", "Lamp",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, StageSlot};

    #[test]
    fn identity_generation_is_deterministic() {
        let mut rng1 = RngBank::new(12345).for_stage(StageSlot::Customer);
        let mut rng2 = RngBank::new(12345).for_stage(StageSlot::Customer);

        assert_eq!(Synth::first_name(&mut rng1), Synth::first_name(&mut rng2));
        assert_eq!(Synth::street_address(&mut rng1), Synth::street_address(&mut rng2));
        assert_eq!(Synth::company_name(&mut rng1), Synth::company_name(&mut rng2));
    }

    #[test]
    fn emails_are_well_formed() {
        let mut rng = RngBank::new(12345).for_stage(StageSlot::Customer);
        for _ in 0..50 {
            let email = Synth::email("Ada", "Lovelace", &mut rng);
            assert!(email.starts_with("ada.lovelace"), "bad email: {email}");
            assert!(email.contains('@'), "bad email: {email}");
        }
    }

    #[test]
    fn postal_codes_are_five_digits() {
        let mut rng = RngBank::new(7).for_stage(StageSlot::Customer);
        for _ in 0..100 {
            let zip = Synth::postal_code(&mut rng);
            assert_eq!(zip.len(), 5, "bad ZIP: {zip}");
            assert!(zip.chars().all(|c| c.is_ascii_digit()), "bad ZIP: {zip}");
        }
    }

    #[test]
    fn product_names_have_three_words() {
        let mut rng = RngBank::new(3).for_stage(StageSlot::Product);
        for _ in 0..50 {
            let name = Synth::product_name(&mut rng);
            assert_eq!(name.split_whitespace().count(), 3, "bad name: {name}");
        }
    }
}
