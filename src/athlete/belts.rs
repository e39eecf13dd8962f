use dto::belt::Belt;
use dto::category::AthleteCategory;

/// Belts that can be picked for the given category.
/// Without a category, every known belt is offered once, kids' belts first.
pub fn belt_options(category: Option<&AthleteCategory>) -> Vec<Belt> {
    match category {
        Some(category) => category.belts().to_vec(),
        None => {
            let mut belts: Vec<Belt> = Vec::new();
            for belt in AthleteCategory::Kid
                .belts()
                .iter()
                .chain(AthleteCategory::Adult.belts())
            {
                if !belts.contains(belt) {
                    belts.push(*belt);
                }
            }
            belts
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_offer_category_belts() {
        assert_eq!(5, belt_options(Some(&AthleteCategory::Adult)).len());
        assert_eq!(13, belt_options(Some(&AthleteCategory::Kid)).len());
    }

    #[test]
    fn should_offer_every_belt_once_without_category() {
        let belts = belt_options(None);

        assert_eq!(17, belts.len());
        assert_eq!(Some(&Belt::White), belts.first());
        assert_eq!(Some(&Belt::Black), belts.last());
        assert_eq!(1, belts.iter().filter(|belt| **belt == Belt::White).count());
    }
}
