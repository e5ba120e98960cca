//! Hand-authored record for the default target site
//!
//! Substituted as a whole when the page could not be fetched. The data lives in
//! static tables; [`fallback_record`] builds a fresh owned copy on every call.

use std::collections::BTreeMap;

use crate::extractors::{
    Contact, Content, ContentSection, ExtractionResult, FallbackContact, FallbackContent, Feature,
    HeroBanner, Location, Navigation, NavigationLink, ProductEntry, SiteInfo, Testimonial,
};
use crate::matchers::SocialPlatform;

const SITE_NAME: &str = "AA Wheel & Truck Supply";
const SITE_TITLE: &str = "Your trusted partner for the right part, on time, every time!";
const SITE_TAGLINE: &str = "Supplying Quality Truck & Trailer Parts Nationwide.";
const SITE_DESCRIPTION: &str = "At AA Wheel & Truck Supply, we are your most trusted truck and trailer parts supplier. Providing services to operators, shops, and independent drivers across the Midwest.";
const HERO_CTA: &str = "Become a Customer";

const MAIN_NAV: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Products & Supplier", "/products"),
    ("Where to Buy", "/where-to-buy"),
    ("Forms Library", "/forms"),
    ("Contact Us", "/contact"),
];

const FOOTER_NAV: &[(&str, &str)] = &[
    ("About Us", "/about"),
    ("Products & Specials", "/products"),
    ("Where to Buy", "/where-to-buy"),
    ("Testimonials", "/testimonials"),
    ("Contact Us", "/contact"),
    ("Privacy Policy", "/privacy"),
    ("Terms & Conditions", "/terms"),
];

const ABOUT_HEADING: &str = "What We Do at AA Wheel & Truck Supply";
const ABOUT_CONTENT: &str = "At AA Wheel & Truck Supply, we are your most trusted truck and trailer parts supplier. Providing services to operators, shops, and independent drivers across the Midwest. Our vast inventory includes heavy-duty truck parts, air brake components, trailer axle components, and much more. We are readily equipped for a fast delivery to your doorstep. Our specialties include providing OEM truck parts and aftermarket solutions, including Meritor brake components, Dexter axle parts, and Aloca truck wheels. So whether you're looking for replacement parts for trailers, brake parts for semi-trucks, or truck suspension parts, our knowledgeable team is here to help. As the most trusted and leading wholesale truck parts supplier, we serve Kansas City, Omaha, and Springfield with heavy-duty, DOT-approved products and industry expertise you can rely on.";

/// (number, title, description)
const FEATURES: &[(&str, &str, &str)] = &[
    (
        "01",
        "Customer Focused Mindset",
        "We develop strategies focusing on the daily challenges that truck drivers and technicians face. Therefore, we provide what our customers want.",
    ),
    (
        "02",
        "Industry Expertise",
        "We have been the leaders in this industry for over 25 years and are constantly evolving to provide more durable and high-quality parts and solutions for modern fleets.",
    ),
    (
        "03",
        "In-House Technical Support",
        "Precision is important. From brake assemblies to wheel fittings, every product is created accurately. If you still require any support, we have a super-responsive in-house technical support team.",
    ),
    (
        "04",
        "Fast, Reliable Delivery",
        "Your product is delivered just like the way you saw it in the pictures. We provide a reliable and fast delivery to provide you with the best customer experience.",
    ),
];

/// (name, description, image); the category is the product name
const PRODUCTS: &[(&str, &str, &str)] = &[
    (
        "Suspension",
        "Reliable Performance and Ride Stability - AA Wheel and Truck Supply provides the most durable suspensions, engineered for heavy-duty action and performance. Our suspension parts are made to absorb road shocks, reduce wear on your vehicle, and provide a smoother rider under immense loads. Ideal for fleets, trailers, and commercial trucks that provide stability and comfort.",
        "/images/suspension.jpg",
    ),
    (
        "Dressed Axles",
        "Complete Axle Assemblies - These are completely dressed axles come pre-assembled with all the essential components which includes brakes, bearings and hubs. Crafted according to OEM specifications, these axles provide seamless installation, minimized downtime and exceptional reliability. Ideal for replacements or new builds, these axles provide front and rear application in heavy-duty trucks and trailers.",
        "/images/dressed-axles.jpg",
    ),
    (
        "Chemicals and Lubricants",
        "Premium-grade chemicals and lubricants designed to enhance performance and provide superior protection, ensuring your machinery and equipment operate at their best under varying conditions.",
        "/images/chemicals.jpg",
    ),
    (
        "Safety Equipment",
        "The presence of essential safety equipment is vital for safeguarding employees and maintaining regulatory compliance in various workplaces. This equipment not only serves as a protective barrier against potential hazards but also fosters a culture of safety and responsibility.",
        "/images/safety.jpg",
    ),
    (
        "Cargo Security",
        "Reliable cargo security solutions meticulously crafted to provide unwavering protection for your valuable shipments, guaranteeing their safe and secure arrival at their intended destination.",
        "/images/cargo-security.jpg",
    ),
    (
        "Trailer Body Parts",
        "Heavy-Duty Trailer Body Components - From structural improvements to side panels and doors, our trailer body parts are crafted to provide efficiency and durability. These components are easy to fit and provide resistance to wear, weather and road stress.",
        "/images/trailer-body.jpg",
    ),
    (
        "Air & Hydraulic Components",
        "High-quality air and hydraulic components for heavy-duty truck and trailer applications.",
        "/images/air-hydraulic.jpg",
    ),
    (
        "Brake Parts",
        "DOT-approved brake parts including Meritor brake components for reliable stopping power.",
        "/images/brake-parts.jpg",
    ),
    (
        "Lighting & Electrical",
        "Complete lighting and electrical solutions for trucks and trailers.",
        "/images/lighting.jpg",
    ),
];

/// (author, date, text)
const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "chris",
        "2025-08-24",
        "Terrence will go above and beyond to help the customer. You can tell he loves the companies customers and the parts he sells are more than just a job to him. He single handedly earned my business for life.",
    ),
    (
        "Mikel Eades",
        "2025-04-04",
        "This place is the place to go to get your heavier duty trailer parts. I am very pleased with Terrence Crith. Phenomenal customer service, knows what he's talking about, gets you what you need down to a T. My customer was in an emergency and needed an 8k axle ASAP and Terrance went above and beyond.",
    ),
    (
        "Randy Stanton",
        "2024-09-14",
        "Have been using them for many years. They have always had what I needed! And Great Service!!",
    ),
    (
        "Dane Greathouse",
        "2024-04-23",
        "Great service and competitive prices.",
    ),
    (
        "Shane Johnson",
        "2023-11-02",
        "Great place for truck and trailer parts.",
    ),
];

const PHONES: &[&str] = &[
    "800-688-2953",
    "800-467-0060",
    "800-486-4335",
    "(816) 221-9556",
    "(402) 597-6118",
];

const LOCATIONS: &[(&str, &str)] = &[
    ("Omaha, NE", "800-688-2953"),
    ("Springfield, MO", "800-467-0060"),
    ("North Kansas City, MO", "800-486-4335"),
];

const SOCIAL: &[(SocialPlatform, &str)] = &[
    (SocialPlatform::Instagram, "https://instagram.com/aawheel"),
    (SocialPlatform::Whatsapp, "https://wa.me/"),
    (SocialPlatform::Facebook, "https://facebook.com/aawheel"),
];

const CORRELATIONS: &[(&str, &str)] = &[
    ("home_to_products", "CTA buttons link to products page"),
    ("products_to_contact", "Product pages link to contact for quotes"),
    ("home_to_about", "About section links from hero"),
];

/// The complete substitute record used when no page is available
pub fn fallback_record() -> ExtractionResult {
    ExtractionResult {
        site_info: SiteInfo {
            name: SITE_NAME.to_string(),
            title: SITE_TITLE.to_string(),
            tagline: SITE_TAGLINE.to_string(),
            description: SITE_DESCRIPTION.to_string(),
        },
        navigation: Navigation {
            main: links(MAIN_NAV),
            footer: links(FOOTER_NAV),
        },
        content: Content::Fallback(FallbackContent {
            hero: HeroBanner {
                title: SITE_TITLE.to_string(),
                subtitle: SITE_TAGLINE.to_string(),
                cta: HERO_CTA.to_string(),
            },
            about: ContentSection {
                heading: ABOUT_HEADING.to_string(),
                content: ABOUT_CONTENT.to_string(),
            },
            features: FEATURES
                .iter()
                .map(|(number, title, description)| Feature {
                    number: number.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            products: PRODUCTS
                .iter()
                .map(|(name, description, image)| ProductEntry {
                    name: name.to_string(),
                    description: description.to_string(),
                    category: Some(name.to_string()),
                    image: Some(image.to_string()),
                })
                .collect(),
            testimonials: TESTIMONIALS
                .iter()
                .map(|(author, date, text)| Testimonial {
                    author: author.to_string(),
                    text: text.to_string(),
                    date: Some(date.to_string()),
                })
                .collect(),
        }),
        contact: Contact::Fallback(FallbackContact {
            phones: PHONES.iter().map(|p| p.to_string()).collect(),
            locations: LOCATIONS
                .iter()
                .map(|(city, phone)| Location {
                    city: city.to_string(),
                    phone: phone.to_string(),
                })
                .collect(),
        }),
        social: SOCIAL
            .iter()
            .map(|(platform, url)| (*platform, url.to_string()))
            .collect(),
        correlations: CORRELATIONS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn links(table: &[(&str, &str)]) -> Vec<NavigationLink> {
    table
        .iter()
        .map(|(text, href)| NavigationLink {
            text: text.to_string(),
            href: href.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_complete() {
        let record = fallback_record();
        assert_eq!(record.site_info.name, "AA Wheel & Truck Supply");
        assert_eq!(record.navigation.main.len(), 6);
        assert_eq!(record.navigation.footer.len(), 7);
        assert_eq!(record.content.products().len(), 9);
        assert_eq!(record.content.testimonials().len(), 5);
        assert_eq!(record.contact.phones().len(), 5);
        assert_eq!(record.contact.locations().len(), 3);
        assert_eq!(record.social.len(), 3);
        assert_eq!(record.correlations.len(), 3);

        let Content::Fallback(content) = &record.content else {
            panic!("fallback content expected");
        };
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.hero.title, record.site_info.title);
        assert_eq!(content.hero.subtitle, record.site_info.tagline);
        assert_eq!(content.hero.cta, "Become a Customer");
    }

    #[test]
    fn test_fallback_is_stable() {
        assert_eq!(fallback_record(), fallback_record());
    }
}
