use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::instance::{Instance, Number};

pub trait InstanceWriter {
    fn try_write_instance<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<N: Number> InstanceWriter for Instance<N> {
    fn try_write_instance<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(writer, "p kp {} {}", self.number_of_items(), self.bound())?;

        for item in self.items() {
            writeln!(writer, "{} {}", item.value(), item.cost())?;
        }

        Ok(())
    }

    fn try_write_instance_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_instance(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{instance::Item, io::InstanceReader, testing::generate_random_instance_stream};
    use rand::SeedableRng;

    #[test]
    fn hard_coded() {
        let instance = Instance::new(vec![Item::new(3, 2), Item::new(5, 4)], 6);

        let output = {
            let mut buffer: Vec<u8> = Vec::new();
            instance
                .try_write_instance(&mut buffer)
                .expect("Failed to write");
            String::from_utf8(buffer).unwrap()
        };

        assert_eq!(output, "p kp 2 6\n3 2\n5 4\n");
    }

    #[test]
    fn transcribe() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1234);
        let dir = tempfile::tempdir().unwrap();

        for (i, instance) in generate_random_instance_stream::<i64>(&mut rng, 30)
            .take(20)
            .enumerate()
        {
            let path = dir.path().join(format!("random{i}.kp"));
            instance.try_write_instance_file(&path).unwrap();

            let read_back = Instance::<i64>::try_read_instance_file(&path).unwrap();
            assert_eq!(read_back, instance);
        }
    }
}
