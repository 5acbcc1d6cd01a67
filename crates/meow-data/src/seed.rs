//! # Sample Data
//!
//! The catalog, order history and starter cart the storefront ships with
//! for development and demos.
//!
//! ## Catalog
//! ```text
//! id  sku      name                         price     stock  category
//! ──  ───────  ───────────────────────────  ────────  ─────  ──────────
//!  1  CAM-001  Camiseta Gatuna              $35.000      15  camisetas
//!  2  ACC-001  Accesorio Gatuno             $20.000       8  accesorios
//!  3  SAC-001  Saco Edición Limitada        $170.000      3  edicion
//!  4  PAN-001  Pantalon Edición Limitada    $270.000     12  edicion
//!  5  MED-001  Medias Edición Limitada      $70.000      20  edicion
//!  6  ZAP-001  Zapatos Edición Limitada     $370.000      6  edicion
//! ```
//!
//! ## Users
//! ```text
//! id  name             email                    role      status
//! ──  ───────────────  ───────────────────────  ────────  ────────
//!  1  María González   maria@example.com        customer  activo
//!  2  Andres Pulecio   andres@meowthreads.com   admin     activo
//!  3  Ana Martínez     ana@example.com          customer  activo
//!  4  Pedro Inactivo   pedro@example.com        customer  inactivo
//! ```

use chrono::NaiveDate;
use meow_core::{
    Category, Customer, LineItem, Money, Order, OrderItem, OrderStatus, PaymentStatus, Product,
    ProductId, Role, User, UserId, UserStatus,
};

fn sizes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: ProductId,
    sku: &str,
    name: &str,
    description: &str,
    price: i64,
    image: &str,
    size_list: &[&str],
    stock: i64,
    category: Category,
) -> Product {
    Product {
        id,
        sku: sku.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_units(price),
        image: image.to_string(),
        sizes: sizes(size_list),
        stock,
        category,
    }
}

/// The six products of the launch catalog.
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "CAM-001",
            "Camiseta Gatuna",
            "Camiseta con estampado de gato",
            35_000,
            "/images/camiseta1.webp",
            &["XS", "S", "M", "L", "XL"],
            15,
            Category::Shirts,
        ),
        product(
            2,
            "ACC-001",
            "Accesorio Gatuno",
            "Collar de gato personalizado",
            20_000,
            "/images/collar1.webp",
            &["Único"],
            8,
            Category::Accessories,
        ),
        product(
            3,
            "SAC-001",
            "Saco Edición Limitada",
            "Saco exclusivo MeowThreads",
            170_000,
            "/images/saco1.webp",
            &["S", "M", "L", "XL"],
            3,
            Category::LimitedEdition,
        ),
        product(
            4,
            "PAN-001",
            "Pantalon Edición Limitada",
            "Pantalon exclusivo MeowThreads",
            270_000,
            "/images/pantalon1.webp",
            &["28", "30", "32", "34", "36", "38"],
            12,
            Category::LimitedEdition,
        ),
        product(
            5,
            "MED-001",
            "Medias Edición Limitada",
            "Medias exclusivo MeowThreads",
            70_000,
            "/images/medias1.webp",
            &["S", "M", "L"],
            20,
            Category::LimitedEdition,
        ),
        product(
            6,
            "ZAP-001",
            "Zapatos Edición Limitada",
            "Zapatos exclusivo MeowThreads",
            370_000,
            "/images/zapatos1.webp",
            &["36", "37", "38", "39", "40", "41", "42"],
            6,
            Category::LimitedEdition,
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn user(
    id: UserId,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    created_at: NaiveDate,
    last_login: NaiveDate,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at,
        last_login: Some(last_login),
    }
}

/// The accounts managed from the back office.
pub fn users() -> Vec<User> {
    vec![
        user(1, "María González", "maria@example.com", Role::Customer, UserStatus::Active, date(2024, 1, 15), date(2024, 8, 3)),
        user(2, "Andres Pulecio", "andres@meowthreads.com", Role::Admin, UserStatus::Active, date(2024, 1, 1), date(2024, 8, 4)),
        user(3, "Ana Martínez", "ana@example.com", Role::Customer, UserStatus::Active, date(2024, 2, 20), date(2024, 8, 2)),
        user(4, "Pedro Inactivo", "pedro@example.com", Role::Customer, UserStatus::Inactive, date(2024, 3, 10), date(2024, 7, 15)),
    ]
}

fn customer(id: UserId, name: &str, email: &str) -> Customer {
    Customer {
        user_id: id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn maria() -> Customer {
    customer(1, "María González", "maria@example.com")
}

fn ana() -> Customer {
    customer(3, "Ana Martínez", "ana@example.com")
}

fn pedro() -> Customer {
    customer(4, "Pedro Inactivo", "pedro@example.com")
}

fn item(product_id: ProductId, name: &str, size: &str, quantity: i64, price: i64, image: &str) -> OrderItem {
    OrderItem {
        product_id,
        name: name.to_string(),
        size: size.to_string(),
        quantity,
        unit_price: Money::from_units(price),
        image: image.to_string(),
    }
}

/// Past orders shown in the order history.
///
/// Totals are what was charged at the time and are not recomputed.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "PED-2025-001".to_string(),
            date: date(2025, 1, 28),
            status: OrderStatus::Enviado,
            payment: PaymentStatus::Pagado,
            customer: Some(maria()),
            items: vec![
                item(1, "Camiseta Gatuna", "M", 2, 35_000, "/images/camiseta1.webp"),
                item(3, "Saco Edición Limitada", "L", 1, 170_000, "/images/saco1.webp"),
                item(5, "Medias Edición Limitada", "M", 1, 70_000, "/images/medias1.webp"),
            ],
            total: Money::from_units(305_000),
            shipping_address: "Calle 123 #45-67, Bogotá".to_string(),
        },
        Order {
            id: "PED-2025-002".to_string(),
            date: date(2025, 1, 30),
            status: OrderStatus::Pendiente,
            payment: PaymentStatus::Pendiente,
            customer: Some(ana()),
            items: vec![
                item(2, "Accesorio Gatuno", "Único", 1, 20_000, "/images/collar1.webp"),
                item(4, "Pantalon Edición Limitada", "32", 1, 270_000, "/images/pantalon1.webp"),
            ],
            total: Money::from_units(290_000),
            shipping_address: "Carrera 456 #78-90, Medellín".to_string(),
        },
        Order {
            id: "PED-2025-003".to_string(),
            date: date(2025, 2, 1),
            status: OrderStatus::Entregado,
            payment: PaymentStatus::Pagado,
            customer: Some(maria()),
            items: vec![
                item(6, "Zapatos Edición Limitada", "40", 1, 370_000, "/images/zapatos1.webp"),
                item(2, "Accesorio Gatuno", "Único", 1, 20_000, "/images/collar1.webp"),
            ],
            total: Money::from_units(390_000),
            shipping_address: "Avenida 789 #12-34, Cali".to_string(),
        },
        Order {
            id: "PED-2025-004".to_string(),
            date: date(2025, 1, 25),
            status: OrderStatus::Cancelado,
            payment: PaymentStatus::Fallido,
            customer: Some(pedro()),
            items: vec![item(1, "Camiseta Gatuna", "S", 3, 35_000, "/images/camiseta1.webp")],
            total: Money::from_units(105_000),
            shipping_address: "Diagonal 321 #56-78, Barranquilla".to_string(),
        },
    ]
}

/// The starter cart: two shirts, a collar and a limited-edition jacket.
pub fn cart_lines() -> Vec<LineItem> {
    let catalog = products();
    [(1, "M", 2), (2, "Único", 1), (3, "L", 1)]
        .into_iter()
        .filter_map(|(id, size, qty)| {
            catalog
                .iter()
                .find(|p| p.id == id)
                .map(|p| LineItem::from_product(p, size, qty))
        })
        .collect()
}
