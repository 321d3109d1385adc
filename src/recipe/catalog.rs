use super::{Category, Difficulty, Macros, Recipe};

/// Category active at startup.
///
pub const DEFAULT_CATEGORY_ID: &str = "fat-loss";

/// Browsing categories, in display order.
///
pub const CATEGORIES: [Category; 5] = [
    Category {
        id: "fat-loss",
        name: "高效减脂",
        query: "低热量高饱腹感的减脂餐",
        icon: "🥗",
    },
    Category {
        id: "muscle",
        name: "增肌蛋白",
        query: "高蛋白健身后的恢复餐",
        icon: "💪",
    },
    Category {
        id: "student",
        name: "宿舍快手",
        query: "适合宿舍只用电煮锅做的简单美食",
        icon: "🎓",
    },
    Category {
        id: "work",
        name: "打工人便当",
        query: "适合带饭的健康便当，冷吃也好吃",
        icon: "🍱",
    },
    Category {
        id: "low-carb",
        name: "低碳饮食",
        query: "生酮或低碳水化合物食谱",
        icon: "🥑",
    },
];

/// Return the category with the given id, if any.
///
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Return the recipes shown before anything has been generated.
///
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "seed-1".to_string(),
            title: "青柠手撕鸡胸肉".to_string(),
            description: "清爽不腻，高蛋白低脂肪，夏日减脂必备神器。".to_string(),
            calories: 280,
            time_minutes: 20,
            difficulty: Difficulty::Easy,
            tags: strings(&["高蛋白", "凉拌", "减脂"]),
            ingredients: strings(&[
                "鸡胸肉 200g",
                "青柠檬 1个",
                "小米辣 2根",
                "香菜 1把",
                "生抽 1勺",
            ]),
            steps: strings(&[
                "鸡胸肉冷水下锅煮熟，撕成丝。",
                "青柠檬切片，小米辣切圈，香菜切段。",
                "所有调料混合淋在鸡丝上拌匀即可。",
            ]),
            macros: Macros {
                protein: 45.0,
                fat: 5.0,
                carbs: 8.0,
            },
            image_url: Some("https://picsum.photos/seed/chickensalad/600/400".to_string()),
            category: "高效减脂".to_string(),
        },
        Recipe {
            id: "seed-2".to_string(),
            title: "无米番茄烩饭".to_string(),
            description: "用花菜碎代替米饭，热量减半，饱腹感不减。".to_string(),
            calories: 150,
            time_minutes: 15,
            difficulty: Difficulty::Easy,
            tags: strings(&["低碳", "伪炒饭", "晚餐"]),
            ingredients: strings(&["花菜 半颗", "番茄 1个", "鸡蛋 1个", "黑胡椒 适量"]),
            steps: strings(&[
                "花菜切碎成米粒大小。",
                "番茄炒出汁，加入花菜碎翻炒。",
                "打入鸡蛋炒散，加盐黑胡椒出锅。",
            ]),
            macros: Macros {
                protein: 12.0,
                fat: 8.0,
                carbs: 10.0,
            },
            image_url: Some("https://picsum.photos/seed/caulirice/600/400".to_string()),
            category: "低碳饮食".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_ids_are_unique() {
        let ids: HashSet<&str> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATEGORIES.len());
    }

    #[test]
    fn default_category_exists() {
        assert!(category_by_id(DEFAULT_CATEGORY_ID).is_some());
    }

    #[test]
    fn category_lookup() {
        let muscle = category_by_id("muscle").unwrap();
        assert_eq!(muscle.name, "增肌蛋白");
        assert_eq!(muscle.query, "高蛋白健身后的恢复餐");
        assert!(category_by_id("dessert").is_none());
    }

    #[test]
    fn seeds_are_two_distinct_recipes() {
        let seeds = seed_recipes();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].id, "seed-1");
        assert_eq!(seeds[1].id, "seed-2");
        assert_ne!(seeds[0].id, seeds[1].id);
    }
}
