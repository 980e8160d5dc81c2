//! Built-in course catalog used when no `--catalog` file is given

use crate::course::{Catalog, Course};

/// The fifteen courses bundled with the binary, in display order.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Course::new(
            "Introduction to Kotlin",
            "KOT101",
            3,
            "Covers Kotlin programming basics and syntax.",
            "None",
            "JetBrains Academy",
        ),
        Course::new(
            "Android Fundamentals",
            "AND201",
            4,
            "Essential Android app development concepts.",
            "Introduction to Kotlin",
            "Google Android Team",
        ),
        Course::new(
            "Jetpack Compose Basics",
            "JCP110",
            3,
            "Learn to build UIs with Jetpack Compose.",
            "Android Fundamentals",
            "Android Developers",
        ),
        Course::new(
            "Advanced Compose Layouts",
            "JCP210",
            3,
            "Create complex layouts using Compose.",
            "Jetpack Compose Basics",
            "Compose Community",
        ),
        Course::new(
            "State in Compose",
            "JCP220",
            3,
            "Manage UI state in Compose apps.",
            "Jetpack Compose Basics",
            "Compose Team",
        ),
        Course::new(
            "Material Design in Compose",
            "JCP310",
            2,
            "Use Material Design components in Compose.",
            "State in Compose",
            "Material Design Team",
        ),
        Course::new(
            "Networking with Retrofit",
            "NET301",
            2,
            "Connect your app to the internet with Retrofit.",
            "Android Fundamentals",
            "Square, Inc.",
        ),
        Course::new(
            "Room Database Essentials",
            "DB201",
            3,
            "Store data locally with Room.",
            "Android Fundamentals",
            "Android Architecture Team",
        ),
        Course::new(
            "Dependency Injection with Hilt",
            "DI101",
            2,
            "Use Hilt for dependency injection.",
            "Android Fundamentals",
            "Google Dagger Team",
        ),
        Course::new(
            "Testing in Android",
            "TST101",
            2,
            "Basics of unit and UI testing in Android.",
            "Android Fundamentals",
            "Android Testing Team",
        ),
        Course::new(
            "Publishing Your App",
            "PUB110",
            1,
            "Steps for releasing your app on Play Store.",
            "Testing in Android",
            "Google Play Team",
        ),
        Course::new(
            "Animations in Compose",
            "JCP320",
            2,
            "Add simple animations to Compose UIs.",
            "Jetpack Compose Basics",
            "Compose Animations Team",
        ),
        Course::new(
            "Accessibility Best Practices",
            "ACC101",
            2,
            "Make your app accessible to all users.",
            "Material Design in Compose",
            "Android Accessibility Team",
        ),
        Course::new(
            "Compose for Wear OS",
            "JCP410",
            2,
            "Develop UIs for Wear OS with Compose.",
            "Jetpack Compose Basics",
            "Wear OS Team",
        ),
        Course::new(
            "Compose for Desktop",
            "JCP420",
            2,
            "Create desktop apps using Compose.",
            "Jetpack Compose Basics",
            "JetBrains Compose Multiplatform",
        ),
    ])
}
