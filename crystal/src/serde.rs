use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::vector::{Vec2, Vec3};

// vectors are written as plain tuples, `[x, y, z]`, to keep the encoded mesh data compact

impl<T> Serialize for Vec2<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.end()
    }
}

impl<T> Serialize for Vec3<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.serialize_element(&self.z)?;
        tup.end()
    }
}

impl<'de, T> Deserialize<'de> for Vec2<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = deserializer.deserialize_tuple(2, ComponentVisitor::<T, 2>::new())?;
        Ok(Vec2::new(x, y))
    }
}

impl<'de, T> Deserialize<'de> for Vec3<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y, z] = deserializer.deserialize_tuple(3, ComponentVisitor::<T, 3>::new())?;
        Ok(Vec3::new(x, y, z))
    }
}

struct ComponentVisitor<T, const N: usize> {
    _marker: PhantomData<T>,
}

impl<T, const N: usize> ComponentVisitor<T, N> {
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, T, const N: usize> Visitor<'de> for ComponentVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = [T; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a vector with {} components", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut components: Vec<T> = Vec::with_capacity(N);
        for idx in 0..N {
            let component = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(idx, &self))?;
            components.push(component);
        }

        components
            .try_into()
            .map_err(|_| <A::Error as de::Error>::invalid_length(N, &self))
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::{Vec2, Vec3};

    #[test]
    fn vec3_bincode_roundtrip() {
        let vec: Vec3<f32> = Vec3::new(1.0, -2.5, 3.25);
        let bytes = bincode::serialize(&vec).unwrap();

        // three bare f32s, no length prefix
        assert_eq!(bytes.len(), 12);
        assert_eq!(bincode::deserialize::<Vec3<f32>>(&bytes).unwrap(), vec);
    }

    #[test]
    fn vec2_rejects_short_input() {
        let bytes = bincode::serialize(&1.0f32).unwrap();
        assert!(bincode::deserialize::<Vec2<f32>>(&bytes).is_err());
    }
}
