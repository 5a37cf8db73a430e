//! Demo account and the recipes it starts with.

use crate::domain::types::NewRecipe;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

/// A fixed recipe inserted for the demo account.
#[derive(Debug, Clone, Copy)]
pub struct SeedRecipe {
    pub title: &'static str,
    pub description: &'static str,
    pub ingredients: &'static str,
    pub steps: &'static str,
}

pub const SEED_RECIPES: [SeedRecipe; 8] = [
    SeedRecipe {
        title: "Mie goreng jawa",
        description: "Mie goreng khas Jawa dengan bumbu tradisional",
        ingredients: "mie,telur,sawi,bawang merah,bawang putih,kecap manis",
        steps: "1. Rebus mie\n2. Tumis bumbu\n3. Masukkan mie dan kecap\n4. Aduk rata",
    },
    SeedRecipe {
        title: "Rawon daging",
        description: "Rawon daging sapi khas Jawa Timur",
        ingredients: "daging sapi,kluwek,daun bawang,bawang merah,bawang putih",
        steps: "1. Rebus daging\n2. Tumis bumbu\n3. Masukkan kluwek\n4. Masak hingga matang",
    },
    SeedRecipe {
        title: "Capcay sayur",
        description: "Capcay sayur sehat dan lezat",
        ingredients: "wortel,kembang kol,sawi,ayam,bawang putih",
        steps: "1. Tumis bawang\n2. Masukkan ayam\n3. Tambahkan sayur\n4. Masak hingga matang",
    },
    SeedRecipe {
        title: "Donat kentang",
        description: "Donat kentang empuk dan manis",
        ingredients: "kentang,tepung terigu,gula,mentega,telur",
        steps: "1. Rebus kentang\n2. Campur bahan\n3. Bentuk bulat\n4. Goreng hingga matang",
    },
    SeedRecipe {
        title: "Nasi liwet magic com",
        description: "Nasi liwet praktis pakai magic com",
        ingredients: "beras,ayam,santan,daun salam,serai",
        steps: "1. Cuci beras\n2. Masukkan bahan ke magic com\n3. Masak hingga matang",
    },
    SeedRecipe {
        title: "Sop iga",
        description: "Sop iga sapi segar dan gurih",
        ingredients: "iga sapi,wortel,kentang,daun bawang,bawang putih",
        steps: "1. Rebus iga\n2. Masukkan sayur\n3. Tambahkan bumbu\n4. Masak hingga matang",
    },
    SeedRecipe {
        title: "Tempe bacem",
        description: "Tempe bacem manis gurih khas Jawa",
        ingredients: "tempe,gula merah,air kelapa,daun salam,bawang putih",
        steps: "1. Rebus tempe dengan bumbu\n2. Masak hingga air menyusut\n3. Goreng sebentar",
    },
    SeedRecipe {
        title: "Cilok bumbu kacang",
        description: "Cilok kenyal dengan bumbu kacang pedas",
        ingredients: "tepung tapioka,air,bawang putih,daun bawang,kacang tanah,cabe",
        steps: "1. Campur bahan cilok\n2. Bentuk bulat\n3. Rebus\n4. Sajikan dengan bumbu kacang",
    },
];

impl SeedRecipe {
    pub fn to_new_recipe(self, user_id: i32) -> NewRecipe {
        NewRecipe {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            ingredients: self.ingredients.to_owned(),
            steps: self.steps.to_owned(),
            image_path: None,
            user_id,
        }
    }
}
