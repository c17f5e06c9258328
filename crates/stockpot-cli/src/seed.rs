use crate::client::{ApiClient, NewRecipe};
use anyhow::{Context, Result};

struct SeedRecipe {
    title: &'static str,
    chef: &'static str,
    ingredients: &'static [&'static str],
    directions: &'static str,
    prep_time: i32,
    image_url: Option<&'static str>,
}

// Directions are written as one comma-separated line, the way the show
// command expects to split them into steps.
const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Roasted Tomato Soup",
        chef: "Marta",
        ingredients: &[
            "2 lbs ripe tomatoes",
            "1 onion",
            "2 cloves garlic",
            "4 cups vegetable stock",
            "olive oil",
            "salt and pepper",
        ],
        directions: "Roast the tomatoes and garlic until blistered, sweat the onion in olive oil, add the stock and simmer, blend until smooth, season to taste",
        prep_time: 45,
        image_url: Some("https://images.example.com/tomato-soup.jpg"),
    },
    SeedRecipe {
        title: "Garlic Butter Shrimp",
        chef: "Noah",
        ingredients: &[
            "1 lb shrimp",
            "4 tbsp butter",
            "3 cloves garlic",
            "handful of parsley",
            "half a lemon",
        ],
        directions: "Melt the butter with the garlic, add the shrimp and cook until pink, finish with parsley and lemon juice",
        prep_time: 10,
        image_url: None,
    },
    SeedRecipe {
        title: "Mushroom Risotto",
        chef: "Elena",
        ingredients: &[
            "1 oz dried porcini",
            "1.5 cups arborio rice",
            "6 cups chicken stock",
            "2 tbsp butter",
            "half a cup grated parmesan",
        ],
        directions: "Soak the dried mushrooms in hot water, toast the rice in butter, add stock one ladle at a time, stir in the mushrooms, finish with parmesan",
        prep_time: 60,
        image_url: None,
    },
    SeedRecipe {
        title: "Lemon Drizzle Cake",
        chef: "Priya",
        ingredients: &[
            "225g butter",
            "225g caster sugar",
            "4 eggs",
            "225g self-raising flour",
            "2 lemons",
            "85g icing sugar",
        ],
        directions: "Cream the butter and sugar, beat in the eggs one at a time, fold in the flour and lemon zest, bake at 180C for 45 minutes, prick all over and pour on the lemon syrup",
        prep_time: 75,
        image_url: Some("https://images.example.com/lemon-drizzle.jpg"),
    },
    SeedRecipe {
        title: "Slow Beef Ragu",
        chef: "Tom",
        ingredients: &[
            "2 lbs beef chuck",
            "1 onion",
            "2 carrots",
            "1 cup red wine",
            "2 cans crushed tomatoes",
        ],
        directions: "Brown the beef in batches, soften the onion and carrot, add the wine and reduce, add the tomatoes and return the beef, simmer low for two hours",
        prep_time: 130,
        image_url: None,
    },
];

pub async fn seed(server: &str) -> Result<()> {
    let client = ApiClient::new(server);

    println!("Creating {} sample recipes...", SAMPLE_RECIPES.len());

    for recipe in SAMPLE_RECIPES {
        let request = NewRecipe {
            title: Some(recipe.title.to_string()),
            chef: Some(recipe.chef.to_string()),
            ingredients: Some(recipe.ingredients.iter().map(|i| i.to_string()).collect()),
            directions: Some(recipe.directions.to_string()),
            prep_time: Some(recipe.prep_time),
            image_url: recipe.image_url.map(|u| u.to_string()),
        };

        let created = client
            .create_recipe(&request)
            .await
            .with_context(|| format!("Failed to create recipe: {}", recipe.title))?;

        println!("  Created: {} ({})", recipe.title, created.id);
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("SEED DATA COMPLETE");
    println!("{}", "=".repeat(50));
    println!("Recipes: {}", SAMPLE_RECIPES.len());
    println!("Base URL: {}", server);
    println!("{}", "=".repeat(50));

    Ok(())
}
