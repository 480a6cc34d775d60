use crate::TagType;

mod compound;
mod display;

#[cfg(feature = "serde")]
mod json;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagType::$tag), $val);
            assert_eq!(TagType::try_from($val as u8), Ok(TagType::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
    }

    for value in 11..=u8::MAX {
        assert!(TagType::try_from(value).is_err())
    }
}
