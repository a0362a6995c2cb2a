use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecospot::models::{Category, CategoryStatus};
use ecospot::services::category_field::DEFAULT_CATEGORY_NAMES;
use ecospot::services::{CategoryCatalog, CategoryField, ScreenContext};

fn benchmark_category_click(c: &mut Criterion) {
    let categories: Vec<Category> = DEFAULT_CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let status = if i % 2 == 0 {
                CategoryStatus::Completed
            } else {
                CategoryStatus::Default
            };
            Category::new(i as u32 + 1, *name, status)
        })
        .collect();

    let mut group = c.benchmark_group("category_click");

    group.bench_function("select_default_item", |b| {
        let mut field = CategoryField::new(
            categories.clone(),
            true,
            ScreenContext::Category,
            CategoryCatalog::default(),
        );
        b.iter(|| field.click(black_box("대기오염")))
    });

    group.bench_function("open_completed_badge", |b| {
        let mut field = CategoryField::new(
            categories.clone(),
            true,
            ScreenContext::MyPage,
            CategoryCatalog::default(),
        );
        b.iter(|| field.click(black_box("토양오염")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_category_click);
criterion_main!(benches);
