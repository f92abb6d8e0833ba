use forkify::{parse_ingredients, Ingredient, Quantity, Unit};

fn check(line: &str, quantity: Option<Quantity>, unit: Option<Unit>, name: &str) {
    let parsed = Ingredient::parse(line);
    assert_eq!(parsed.quantity, quantity, "quantity of {:?}", line);
    assert_eq!(parsed.unit, unit, "unit of {:?}", line);
    assert_eq!(parsed.name, name, "name of {:?}", line);
}

#[test]
fn test_real_world_lines() {
    check(
        "1 1/2 cups flour, sifted",
        Quantity::new(3, 2),
        Some(Unit::Cup),
        "flour",
    );
    check(
        "2 (8 ounce) packages cream cheese, softened",
        Some(Quantity::whole(2)),
        Some(Unit::Pkg),
        "cream cheese",
    );
    check(
        "3 Tablespoons Butter (room temperature)",
        Some(Quantity::whole(3)),
        Some(Unit::Tbsp),
        "butter",
    );
    check(
        "1 Large Egg",
        Some(Quantity::whole(1)),
        None,
        "large egg",
    );
    check(
        "¾ cup of brown sugar",
        Quantity::new(3, 4),
        Some(Unit::Cup),
        "brown sugar",
    );
    check(
        "1 lb. ground beef",
        Some(Quantity::whole(1)),
        Some(Unit::Lb),
        "ground beef",
    );
    check(
        "250ml whole milk",
        Some(Quantity::whole(250)),
        Some(Unit::Ml),
        "whole milk",
    );
    check("Fresh parsley for garnish", None, None, "fresh parsley for garnish");
}

#[test]
fn test_whole_list_round_trips_through_display() {
    let lines = [
        "4 1/2 cups (20.25 ounces) unbleached high-gluten flour",
        "1 3/4 teaspoons salt",
        "1 teaspoon instant yeast",
        "1/4 cup olive oil (optional)",
        "1 3/4 cups water, ice cold (40°F)",
        "Semolina flour OR cornmeal for dusting",
    ];
    let parsed = parse_ingredients(&lines);
    let normalized: Vec<String> = parsed.iter().map(|i| i.to_string()).collect();

    assert_eq!(normalized[0], "4 1/2 cup unbleached high-gluten flour");
    assert_eq!(normalized[4], "1 3/4 cup water, ice cold");
    assert_eq!(parse_ingredients(&normalized), parsed);
}

#[test]
fn test_serialized_shape() {
    let value = serde_json::to_value(Ingredient::parse("1/2 cup sugar")).unwrap();
    assert_eq!(value["quantity"], "1/2");
    assert_eq!(value["unit"], "cup");
    assert_eq!(value["name"], "sugar");
    assert!(value.get("note").is_none());

    let unset = serde_json::to_value(Ingredient::parse("salt")).unwrap();
    assert!(unset["quantity"].is_null());
    assert!(unset["unit"].is_null());
}
