use serde::{Deserialize, Serialize};

/// Tabla de códigos de barras conocidos. Es un marcador de posición: no hay
/// base de datos real detrás, solo las entradas sembradas aquí.
#[derive(Debug, Clone)]
pub struct BarcodeTable {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl Default for BarcodeTable {
    fn default() -> Self {
        Self {
            entries: vec![(
                "1234567890".to_string(),
                "This food is suitable for your pet.".to_string(),
            )],
            fallback: "This food may not be suitable for your pet.".to_string(),
        }
    }
}

impl BarcodeTable {
    /// Devuelve (¿es apto?, mensaje) para un código.
    pub fn lookup(&self, barcode: &str) -> (bool, &str) {
        match self.entries.iter().find(|(code, _)| code == barcode) {
            Some((_, verdict)) => (true, verdict),
            None => (false, &self.fallback),
        }
    }
}

/// Un tramo de edad (años, ambos extremos incluidos) con su recomendación.
#[derive(Debug, Clone)]
pub struct DietBucket {
    pub min_age: u8,
    pub max_age: u8,
    pub advice: String,
}

/// Tabla de dietas por edad. Total sobre 0..: cualquier edad por encima del
/// último tramo cae en el consejo para perros mayores.
#[derive(Debug, Clone)]
pub struct DietTable {
    buckets: Vec<DietBucket>,
    senior: String,
}

impl Default for DietTable {
    fn default() -> Self {
        Self {
            buckets: vec![
                DietBucket {
                    min_age: 0,
                    max_age: 0,
                    advice: "Recommended diet for puppies: High protein and DHA for brain development.".to_string(),
                },
                DietBucket {
                    min_age: 1,
                    max_age: 7,
                    advice: "Recommended diet for adult dogs: Balanced diet with proteins, vitamins, and minerals.".to_string(),
                },
            ],
            senior: "Recommended diet for senior dogs: Low calorie, joint support supplements.".to_string(),
        }
    }
}

impl DietTable {
    pub fn lookup(&self, age: u8) -> &str {
        self.buckets
            .iter()
            .find(|b| (b.min_age..=b.max_age).contains(&age))
            .map(|b| b.advice.as_str())
            .unwrap_or(&self.senior)
    }
}

pub const TREATS: &str = "Recommended Treats: Dental chews, peanut butter biscuits.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLink {
    pub title: String,
    pub url: String,
}

pub fn suggested_links() -> Vec<FoodLink> {
    vec![
        FoodLink {
            title: "Buy Premium Dog Food".to_string(),
            url: "https://example.com/dog-food".to_string(),
        },
        FoodLink {
            title: "Buy Grain-Free Cat Food".to_string(),
            url: "https://example.com/cat-food".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_barcode_is_suitable() {
        let table = BarcodeTable::default();
        let (suitable, message) = table.lookup("1234567890");
        assert!(suitable);
        assert_eq!(message, "This food is suitable for your pet.");
    }

    #[test]
    fn unknown_barcode_falls_back() {
        let table = BarcodeTable::default();
        let (suitable, message) = table.lookup("0000000000");
        assert!(!suitable);
        assert_eq!(message, "This food may not be suitable for your pet.");
    }

    #[test]
    fn diet_buckets_cover_the_slider_range() {
        let table = DietTable::default();
        assert!(table.lookup(0).contains("puppies"));
        assert!(table.lookup(4).contains("adult dogs"));
        assert!(table.lookup(10).contains("senior dogs"));
    }

    #[test]
    fn adult_bucket_bounds_are_inclusive() {
        let table = DietTable::default();
        assert!(table.lookup(1).contains("adult dogs"));
        assert!(table.lookup(7).contains("adult dogs"));
        assert!(table.lookup(8).contains("senior dogs"));
    }

    #[test]
    fn treats_are_constant_across_calls() {
        let first = TREATS.to_string();
        for _ in 0..3 {
            assert_eq!(TREATS, first);
        }
    }

    #[test]
    fn two_suggested_links() {
        let links = suggested_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://example.com/dog-food");
        assert_eq!(links[1].url, "https://example.com/cat-food");
    }
}
