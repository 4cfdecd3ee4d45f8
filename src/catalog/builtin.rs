use super::product::{Product, Review};

const BOOT_IMAGE: &str = "https://cdn.poehali.dev/projects/9e60444e-d85c-46b7-8589-458c8a04c9ea/files/72d931c3-3dad-4d1b-8208-a8974ef4b53a.jpg";

fn review(author: &str, rating: u8, text: &str, date: &str) -> Review {
    Review {
        author: author.to_string(),
        rating,
        text: text.to_string(),
        date: date.to_string(),
    }
}

pub(super) fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Унты классические из оленя".to_string(),
            price: 15900,
            image: BOOT_IMAGE.to_string(),
            rating: 5,
            reviews_count: 12,
            in_stock: true,
            reviews: vec![
                review(
                    "Анна Петрова",
                    5,
                    "Отличные унты! Очень теплые и удобные. Носила всю зиму в Сибири - ноги всегда в тепле.",
                    "15 января 2024",
                ),
                review(
                    "Дмитрий Соколов",
                    5,
                    "Качество на высоте. Ручная работа чувствуется в каждой детали.",
                    "22 декабря 2023",
                ),
            ],
        },
        Product {
            id: 2,
            name: "Унты женские с вышивкой".to_string(),
            price: 18500,
            image: BOOT_IMAGE.to_string(),
            rating: 5,
            reviews_count: 8,
            in_stock: true,
            reviews: vec![review(
                "Мария Иванова",
                5,
                "Очень красивые! Вышивка выполнена аккуратно, унты легкие и теплые.",
                "3 февраля 2024",
            )],
        },
        Product {
            id: 3,
            name: "Унты мужские высокие".to_string(),
            price: 17200,
            image: BOOT_IMAGE.to_string(),
            rating: 4,
            reviews_count: 6,
            in_stock: true,
            reviews: vec![review(
                "Сергей Волков",
                4,
                "Хорошие унты, но размер маломерит. Рекомендую брать на размер больше.",
                "10 января 2024",
            )],
        },
        Product {
            id: 4,
            name: "Унты детские".to_string(),
            price: 9900,
            image: BOOT_IMAGE.to_string(),
            rating: 5,
            reviews_count: 15,
            in_stock: false,
            reviews: vec![review(
                "Елена Смирнова",
                5,
                "Купила ребенку - в восторге! Легко надевать, ножка не потеет.",
                "28 декабря 2023",
            )],
        },
    ]
}
